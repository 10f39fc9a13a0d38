//! Get card tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::{ChecklistFilter, path_segment};
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

/// Parameters for the get card tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCardParams {
    #[schemars(description = "The card ID or shortLink")]
    pub card_id: String,

    #[schemars(description = "Include card members")]
    pub members: Option<bool>,

    #[schemars(description = "Include checklists")]
    pub checklists: Option<ChecklistFilter>,

    #[schemars(description = "Include attachments")]
    pub attachments: Option<bool>,
}

/// Get card tool - one card with optional members, checklists and attachments.
pub struct GetCardTool;

impl ToolHandler for GetCardTool {
    const NAME: &'static str = "get_card";
    const DESCRIPTION: &'static str = "Get a specific card by ID with detailed information";
    type Params = GetCardParams;

    fn build(params: &GetCardParams) -> Result<OutboundRequest, ToolError> {
        let card_id = path_segment("card_id", &params.card_id)?;

        let mut query = QueryParams::new();
        query
            .set_bool("members", params.members)
            .set_opt("checklists", params.checklists.map(|c| c.as_str()))
            .set_bool("attachments", params.attachments);

        Ok(OutboundRequest::get(format!("/cards/{card_id}")).with_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::args;
    use serde_json::json;

    #[test]
    fn test_all_includes() {
        let request = GetCardTool::build_from_args(args(json!({
            "card_id": "c1",
            "members": true,
            "checklists": "all",
            "attachments": true
        })))
        .unwrap();
        assert_eq!(
            request.path_and_query().unwrap(),
            "/cards/c1?members=true&checklists=all&attachments=true"
        );
    }

    #[test]
    fn test_checklists_enum_enforced() {
        let err = GetCardTool::build_from_args(args(json!({
            "card_id": "c1",
            "checklists": "open"
        })))
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_blank_card_id_rejected() {
        let err = GetCardTool::build_from_args(args(json!({ "card_id": "  " }))).unwrap_err();
        assert!(err.to_string().contains("card_id"));
    }
}
