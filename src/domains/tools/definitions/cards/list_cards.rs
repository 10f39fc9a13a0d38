//! List cards tool definition.
//!
//! Cards can be listed either for a single list or for a whole board. The
//! schema marks neither identifier as required, so the builder enforces that
//! at least one is present. `list_id` wins when both are given.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::{CardFilter, path_segment};
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

/// Parameters for the list cards tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCardsParams {
    #[schemars(description = "The board ID (required if no list_id)")]
    pub board_id: Option<String>,

    #[schemars(description = "The list ID (optional, filters to specific list)")]
    pub list_id: Option<String>,

    #[schemars(description = "Filter cards")]
    pub filter: Option<CardFilter>,

    #[schemars(description = "Comma-separated list of fields to return")]
    pub fields: Option<String>,
}

/// List cards tool - cards on a board or in one list.
pub struct ListCardsTool;

impl ToolHandler for ListCardsTool {
    const NAME: &'static str = "list_cards";
    const DESCRIPTION: &'static str = "List all cards on a board or in a specific list";
    type Params = ListCardsParams;

    fn build(params: &ListCardsParams) -> Result<OutboundRequest, ToolError> {
        let path = match (params.list_id.as_deref(), params.board_id.as_deref()) {
            (Some(list_id), _) => format!("/lists/{}/cards", path_segment("list_id", list_id)?),
            (None, Some(board_id)) => {
                format!("/boards/{}/cards", path_segment("board_id", board_id)?)
            }
            (None, None) => {
                return Err(ToolError::invalid_arguments(
                    "Either board_id or list_id is required",
                ));
            }
        };

        let mut query = QueryParams::new();
        query
            .set_opt("filter", params.filter.map(|f| f.as_str()))
            .set_opt("fields", params.fields.as_deref());

        Ok(OutboundRequest::get(path).with_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::args;
    use serde_json::json;

    #[test]
    fn test_by_list() {
        let request = ListCardsTool::build_from_args(args(json!({ "list_id": "l1" }))).unwrap();
        assert_eq!(request.path_and_query().unwrap(), "/lists/l1/cards");
    }

    #[test]
    fn test_by_board_with_filter() {
        let request = ListCardsTool::build_from_args(args(json!({
            "board_id": "b1",
            "filter": "visible",
            "fields": "name,due"
        })))
        .unwrap();
        assert_eq!(request.path, "/boards/b1/cards");
        assert_eq!(request.query.get("filter"), Some("visible"));
        assert_eq!(request.query.get("fields"), Some("name,due"));
    }

    #[test]
    fn test_list_takes_precedence() {
        let request = ListCardsTool::build_from_args(args(json!({
            "board_id": "b1",
            "list_id": "l1"
        })))
        .unwrap();
        assert_eq!(request.path, "/lists/l1/cards");
    }

    #[test]
    fn test_requires_board_or_list() {
        let err = ListCardsTool::build_from_args(args(json!({ "filter": "open" }))).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("board_id"));
        assert!(msg.contains("list_id"));
    }

    #[test]
    fn test_no_default_fields() {
        let request = ListCardsTool::build_from_args(args(json!({ "board_id": "b1" }))).unwrap();
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_list_dot_segment_rejected() {
        let err = ListCardsTool::build_from_args(args(json!({ "list_id": ".." }))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
