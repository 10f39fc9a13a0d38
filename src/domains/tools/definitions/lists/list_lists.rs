//! List lists tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::{ListFilter, path_segment};
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

/// Parameters for the list lists tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListListsParams {
    #[schemars(description = "The board ID")]
    pub board_id: String,

    #[schemars(description = "Filter lists")]
    pub filter: Option<ListFilter>,

    #[schemars(description = "Include cards in each list")]
    pub cards: Option<ListFilter>,
}

/// List lists tool - the lists on one board.
pub struct ListListsTool;

impl ToolHandler for ListListsTool {
    const NAME: &'static str = "list_lists";
    const DESCRIPTION: &'static str = "List all lists on a board";
    type Params = ListListsParams;

    fn build(params: &ListListsParams) -> Result<OutboundRequest, ToolError> {
        let board_id = path_segment("board_id", &params.board_id)?;

        let mut query = QueryParams::new();
        query
            .set_opt("filter", params.filter.map(|f| f.as_str()))
            .set_opt("cards", params.cards.map(|f| f.as_str()));

        Ok(OutboundRequest::get(format!("/boards/{board_id}/lists")).with_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::args;
    use serde_json::json;

    #[test]
    fn test_no_default_filter() {
        let request = ListListsTool::build_from_args(args(json!({ "board_id": "b1" }))).unwrap();
        assert_eq!(request.path_and_query().unwrap(), "/boards/b1/lists");
    }

    #[test]
    fn test_filter_and_cards() {
        let request = ListListsTool::build_from_args(args(json!({
            "board_id": "b1",
            "filter": "closed",
            "cards": "open"
        })))
        .unwrap();
        assert_eq!(
            request.path_and_query().unwrap(),
            "/boards/b1/lists?filter=closed&cards=open"
        );
    }

    #[test]
    fn test_cards_rejects_visible() {
        // nested cards only accept the list-level selectors
        let err = ListListsTool::build_from_args(args(json!({
            "board_id": "b1",
            "cards": "visible"
        })))
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
