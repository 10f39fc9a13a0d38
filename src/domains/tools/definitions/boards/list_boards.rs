//! List boards tool definition.
//!
//! Lists the boards of the authenticated member. Unlike the other listing
//! tools, this one always sends a filter and a field selection.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::definitions::common::BoardFilter;
use crate::domains::tools::{ToolError, ToolHandler};
use crate::trello::{OutboundRequest, QueryParams};

/// Filter sent when the caller gives none.
pub const DEFAULT_FILTER: BoardFilter = BoardFilter::Open;

/// Field selection sent when the caller gives none.
pub const DEFAULT_FIELDS: &str = "name,url,shortLink,desc,closed";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list boards tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListBoardsParams {
    /// Filter boards by type.
    #[schemars(description = "Filter boards by type (default: open)")]
    pub filter: Option<BoardFilter>,

    /// Comma-separated list of fields to return.
    #[schemars(
        description = "Comma-separated list of fields to return (default: name,url,shortLink,desc,closed)"
    )]
    pub fields: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List boards tool - boards visible to the authenticated member.
pub struct ListBoardsTool;

impl ToolHandler for ListBoardsTool {
    const NAME: &'static str = "list_boards";
    const DESCRIPTION: &'static str = "List all boards for the authenticated user";
    type Params = ListBoardsParams;

    fn build(params: &ListBoardsParams) -> Result<OutboundRequest, ToolError> {
        let filter = params.filter.unwrap_or(DEFAULT_FILTER);
        let fields = params.fields.as_deref().unwrap_or(DEFAULT_FIELDS);

        let mut query = QueryParams::new();
        query.set("filter", filter.as_str()).set("fields", fields);

        Ok(OutboundRequest::get("/members/me/boards").with_query(query))
    }
}
