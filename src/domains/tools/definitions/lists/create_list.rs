//! Create list tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::{path_segment, position};
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

/// Parameters for the create list tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateListParams {
    #[schemars(description = "The board ID")]
    pub board_id: String,

    #[schemars(description = "List name")]
    pub name: String,

    #[serde(default, deserialize_with = "position")]
    #[schemars(
        with = "Option<String>",
        description = "Position: 'top', 'bottom', or a positive number"
    )]
    pub pos: Option<String>,
}

/// Create list tool - adds a list to a board.
pub struct CreateListTool;

impl ToolHandler for CreateListTool {
    const NAME: &'static str = "create_list";
    const DESCRIPTION: &'static str = "Create a new list on a board";
    type Params = CreateListParams;

    fn build(params: &CreateListParams) -> Result<OutboundRequest, ToolError> {
        let board_id = path_segment("board_id", &params.board_id)?;

        let mut query = QueryParams::new();
        query
            .set("name", params.name.as_str())
            .set("idBoard", board_id)
            .set_opt("pos", params.pos.as_deref());

        Ok(OutboundRequest::post("/lists").with_query(query))
    }
}
