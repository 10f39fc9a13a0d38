//! Update card tool definition.
//!
//! An absent field is left untouched on Trello. `due` is the one field that
//! can also be cleared: an explicit `null` or empty string sends the literal
//! `due=null`.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::{nullable_string, path_segment, position};
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

/// Token Trello reads as "remove the due date".
pub const CLEAR_DUE: &str = "null";

/// Parameters for the update card tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateCardParams {
    #[schemars(description = "The card ID")]
    pub card_id: String,

    #[schemars(description = "New card name")]
    pub name: Option<String>,

    #[schemars(description = "New description")]
    pub desc: Option<String>,

    #[schemars(description = "Archive/unarchive the card")]
    pub closed: Option<bool>,

    #[serde(default, deserialize_with = "nullable_string")]
    #[schemars(
        with = "Option<String>",
        description = "New due date (ISO 8601 format or null to remove)"
    )]
    pub due: Option<Option<String>>,

    #[serde(rename = "dueComplete")]
    #[schemars(description = "Mark due date complete/incomplete")]
    pub due_complete: Option<bool>,

    #[serde(default, deserialize_with = "position")]
    #[schemars(
        with = "Option<String>",
        description = "New position: 'top', 'bottom', or a positive number"
    )]
    pub pos: Option<String>,
}

impl UpdateCardParams {
    /// Wire value for `due`: `None` leaves it alone, blank or null clears it.
    fn due_value(&self) -> Option<&str> {
        self.due.as_ref().map(|due| match due.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => CLEAR_DUE,
        })
    }
}

/// Update card tool - edits fields of an existing card.
pub struct UpdateCardTool;

impl ToolHandler for UpdateCardTool {
    const NAME: &'static str = "update_card";
    const DESCRIPTION: &'static str = "Update an existing card's properties";
    type Params = UpdateCardParams;

    fn build(params: &UpdateCardParams) -> Result<OutboundRequest, ToolError> {
        let card_id = path_segment("card_id", &params.card_id)?;

        let mut query = QueryParams::new();
        query
            .set_opt("name", params.name.as_deref())
            .set_opt("desc", params.desc.as_deref())
            .set_bool("closed", params.closed)
            .set_opt("due", params.due_value())
            .set_bool("dueComplete", params.due_complete)
            .set_opt("pos", params.pos.as_deref());

        Ok(OutboundRequest::put(format!("/cards/{card_id}")).with_query(query))
    }
}
