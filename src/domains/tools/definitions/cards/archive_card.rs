//! Archive card tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::path_segment;
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

/// Parameters for the archive card tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ArchiveCardParams {
    #[schemars(description = "The card ID to archive")]
    pub card_id: String,
}

/// Archive card tool - closes a card without deleting it.
pub struct ArchiveCardTool;

impl ToolHandler for ArchiveCardTool {
    const NAME: &'static str = "archive_card";
    const DESCRIPTION: &'static str = "Archive (close) a card";
    type Params = ArchiveCardParams;

    fn build(params: &ArchiveCardParams) -> Result<OutboundRequest, ToolError> {
        let card_id = path_segment("card_id", &params.card_id)?;

        let mut query = QueryParams::new();
        query.set("closed", "true");

        Ok(OutboundRequest::put(format!("/cards/{card_id}")).with_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::args;
    use crate::trello::Method;
    use serde_json::json;

    #[test]
    fn test_archive_sets_closed() {
        let request = ArchiveCardTool::build_from_args(args(json!({ "card_id": "c1" }))).unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path_and_query().unwrap(), "/cards/c1?closed=true");
    }
}
