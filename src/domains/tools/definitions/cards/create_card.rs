//! Create card tool definition.
//!
//! All card fields travel in the query string. Member and label ID arrays
//! are sent comma-joined, in the order given.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::{path_segment, position};
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create card tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateCardParams {
    #[schemars(description = "The list ID to create the card in")]
    pub list_id: String,

    #[schemars(description = "Card name/title")]
    pub name: String,

    #[schemars(description = "Card description (supports Markdown)")]
    pub desc: Option<String>,

    #[serde(default, deserialize_with = "position")]
    #[schemars(
        with = "Option<String>",
        description = "Position: 'top', 'bottom', or a positive number"
    )]
    pub pos: Option<String>,

    #[schemars(description = "Due date (ISO 8601 format or null)")]
    pub due: Option<String>,

    #[serde(rename = "dueComplete")]
    #[schemars(description = "Whether the due date is complete")]
    pub due_complete: Option<bool>,

    #[serde(rename = "idMembers")]
    #[schemars(description = "Member IDs to assign")]
    pub id_members: Option<Vec<String>>,

    #[serde(rename = "idLabels")]
    #[schemars(description = "Label IDs to apply")]
    pub id_labels: Option<Vec<String>>,

    #[serde(rename = "urlSource")]
    #[schemars(description = "URL to attach to the card")]
    pub url_source: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create card tool - adds a card to a list.
pub struct CreateCardTool;

impl ToolHandler for CreateCardTool {
    const NAME: &'static str = "create_card";
    const DESCRIPTION: &'static str = "Create a new card on a list";
    type Params = CreateCardParams;

    fn build(params: &CreateCardParams) -> Result<OutboundRequest, ToolError> {
        let list_id = path_segment("list_id", &params.list_id)?;

        let mut query = QueryParams::new();
        query
            .set("idList", list_id)
            .set("name", params.name.as_str())
            .set_opt("desc", params.desc.as_deref())
            .set_opt("pos", params.pos.as_deref())
            .set_opt("due", params.due.as_deref())
            .set_bool("dueComplete", params.due_complete)
            .set_list("idMembers", params.id_members.as_deref())
            .set_list("idLabels", params.id_labels.as_deref())
            .set_opt("urlSource", params.url_source.as_deref());

        Ok(OutboundRequest::post("/cards").with_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::args;
    use crate::trello::Method;
    use serde_json::json;

    #[test]
    fn test_minimal_card() {
        let request = CreateCardTool::build_from_args(args(json!({
            "list_id": "l1",
            "name": "Write docs"
        })))
        .unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.path_and_query().unwrap(),
            "/cards?idList=l1&name=Write+docs"
        );
    }

    #[test]
    fn test_member_ids_joined() {
        let request = CreateCardTool::build_from_args(args(json!({
            "list_id": "l1",
            "name": "Pair on it",
            "idMembers": ["a", "b"]
        })))
        .unwrap();
        assert_eq!(request.query.get("idMembers"), Some("a,b"));
    }

    #[test]
    fn test_label_ids_keep_duplicates() {
        let request = CreateCardTool::build_from_args(args(json!({
            "list_id": "l1",
            "name": "Tag me",
            "idLabels": ["x", "y", "x"]
        })))
        .unwrap();
        assert_eq!(request.query.get("idLabels"), Some("x,y,x"));
    }

    #[test]
    fn test_present_fields_round_trip() {
        let request = CreateCardTool::build_from_args(args(json!({
            "list_id": "l1",
            "name": "Ship 1.0 & celebrate",
            "desc": "**Markdown** = fine",
            "pos": "top",
            "due": "2026-11-01T12:00:00.000Z",
            "dueComplete": false,
            "idMembers": ["m1", "m2"],
            "urlSource": "https://example.com/a?b=c"
        })))
        .unwrap();

        let encoded = request.query.encode().unwrap();
        let decoded: Vec<(String, String)> = serde_urlencoded::from_str(&encoded).unwrap();
        let expected = vec![
            ("idList", "l1"),
            ("name", "Ship 1.0 & celebrate"),
            ("desc", "**Markdown** = fine"),
            ("pos", "top"),
            ("due", "2026-11-01T12:00:00.000Z"),
            ("dueComplete", "false"),
            ("idMembers", "m1,m2"),
            ("urlSource", "https://example.com/a?b=c"),
        ];
        let decoded: Vec<(&str, &str)> = decoded
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(decoded, expected);
        assert!(!request.query.contains("idLabels"));
    }

    #[test]
    fn test_member_ids_must_be_array() {
        let err = CreateCardTool::build_from_args(args(json!({
            "list_id": "l1",
            "name": "Bad",
            "idMembers": "a,b"
        })))
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_list_id_required() {
        let err = CreateCardTool::build_from_args(args(json!({ "name": "Orphan" }))).unwrap_err();
        assert!(err.to_string().contains("list_id"));
    }
}
