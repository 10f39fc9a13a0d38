//! Add comment tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::path_segment;
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

/// Parameters for the add comment tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddCommentParams {
    #[schemars(description = "The card ID")]
    pub card_id: String,

    #[schemars(description = "Comment text")]
    pub text: String,
}

/// Add comment tool - posts a comment action on a card.
pub struct AddCommentTool;

impl ToolHandler for AddCommentTool {
    const NAME: &'static str = "add_comment";
    const DESCRIPTION: &'static str = "Add a comment to a card";
    type Params = AddCommentParams;

    fn build(params: &AddCommentParams) -> Result<OutboundRequest, ToolError> {
        let card_id = path_segment("card_id", &params.card_id)?;

        let mut query = QueryParams::new();
        query.set("text", params.text.as_str());

        Ok(OutboundRequest::post(format!("/cards/{card_id}/actions/comments")).with_query(query))
    }
}
