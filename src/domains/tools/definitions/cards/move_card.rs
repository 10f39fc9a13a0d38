//! Move card tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::{path_segment, position};
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

/// Parameters for the move card tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MoveCardParams {
    #[schemars(description = "The card ID to move")]
    pub card_id: String,

    #[schemars(description = "Destination list ID")]
    pub list_id: String,

    #[schemars(description = "Destination board ID (optional, for cross-board moves)")]
    pub board_id: Option<String>,

    #[serde(default, deserialize_with = "position")]
    #[schemars(
        with = "Option<String>",
        description = "Position in destination list: 'top', 'bottom', or number"
    )]
    pub pos: Option<String>,
}

/// Move card tool - relocates a card to another list, possibly on another board.
pub struct MoveCardTool;

impl ToolHandler for MoveCardTool {
    const NAME: &'static str = "move_card";
    const DESCRIPTION: &'static str = "Move a card to a different list or board";
    type Params = MoveCardParams;

    fn build(params: &MoveCardParams) -> Result<OutboundRequest, ToolError> {
        let card_id = path_segment("card_id", &params.card_id)?;

        let mut query = QueryParams::new();
        query
            .set("idList", params.list_id.as_str())
            .set_opt("idBoard", params.board_id.as_deref())
            .set_opt("pos", params.pos.as_deref());

        Ok(OutboundRequest::put(format!("/cards/{card_id}")).with_query(query))
    }
}
