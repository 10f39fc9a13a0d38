//! Delete card tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::path_segment;
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::OutboundRequest;

/// Parameters for the delete card tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteCardParams {
    #[schemars(description = "The card ID to delete")]
    pub card_id: String,
}

/// Delete card tool - permanent removal.
pub struct DeleteCardTool;

impl ToolHandler for DeleteCardTool {
    const NAME: &'static str = "delete_card";
    const DESCRIPTION: &'static str = "Permanently delete a card (cannot be undone)";
    type Params = DeleteCardParams;

    fn build(params: &DeleteCardParams) -> Result<OutboundRequest, ToolError> {
        let card_id = path_segment("card_id", &params.card_id)?;
        Ok(OutboundRequest::delete(format!("/cards/{card_id}")))
    }
}
