//! Get board tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::{CardFilter, ListFilter, path_segment};
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

/// Parameters for the get board tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetBoardParams {
    /// The board ID or shortLink.
    #[schemars(description = "The board ID or shortLink")]
    pub board_id: String,

    #[schemars(description = "Include lists on the board")]
    pub lists: Option<ListFilter>,

    #[schemars(description = "Include cards on the board")]
    pub cards: Option<CardFilter>,

    #[schemars(description = "Include board members")]
    pub members: Option<bool>,
}

/// Get board tool - one board, optionally with nested lists, cards and members.
pub struct GetBoardTool;

impl ToolHandler for GetBoardTool {
    const NAME: &'static str = "get_board";
    const DESCRIPTION: &'static str = "Get a specific board by ID with detailed information";
    type Params = GetBoardParams;

    fn build(params: &GetBoardParams) -> Result<OutboundRequest, ToolError> {
        let board_id = path_segment("board_id", &params.board_id)?;

        let mut query = QueryParams::new();
        query
            .set_opt("lists", params.lists.map(|f| f.as_str()))
            .set_opt("cards", params.cards.map(|f| f.as_str()))
            .set_bool("members", params.members);

        Ok(OutboundRequest::get(format!("/boards/{board_id}")).with_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::args;
    use serde_json::json;

    #[test]
    fn test_bare_board_has_no_query() {
        let request = GetBoardTool::build_from_args(args(json!({ "board_id": "b1" }))).unwrap();
        assert_eq!(request.path_and_query().unwrap(), "/boards/b1");
    }

    #[test]
    fn test_optional_includes() {
        let request = GetBoardTool::build_from_args(args(json!({
            "board_id": "b1",
            "lists": "open",
            "cards": "visible",
            "members": true
        })))
        .unwrap();
        assert_eq!(
            request.path_and_query().unwrap(),
            "/boards/b1?lists=open&cards=visible&members=true"
        );
    }

    #[test]
    fn test_members_false_is_sent() {
        let request = GetBoardTool::build_from_args(args(json!({
            "board_id": "b1",
            "members": false
        })))
        .unwrap();
        assert_eq!(request.query.get("members"), Some("false"));
    }

    #[test]
    fn test_missing_board_id_rejected() {
        let err = GetBoardTool::build_from_args(args(json!({ "lists": "open" }))).unwrap_err();
        assert!(err.to_string().contains("board_id"));
    }

    #[test]
    fn test_lists_enum_enforced() {
        let err = GetBoardTool::build_from_args(args(json!({
            "board_id": "b1",
            "lists": "visible"
        })))
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_members_must_be_boolean() {
        assert!(
            GetBoardTool::build_from_args(args(json!({
                "board_id": "b1",
                "members": "yes"
            })))
            .is_err()
        );
    }

    #[test]
    fn test_encoded_dot_segment_rejected() {
        let err = GetBoardTool::build_from_args(args(json!({ "board_id": "%2e%2e" }))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
