//! Common utilities shared across Trello tools.
//!
//! This module provides the enumerated argument types, identifier checks,
//! lenient deserializers and result envelope helpers.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::domains::tools::ToolError;

// ============================================================================
// Enumerated arguments
// ============================================================================

/// Board filter for `list_boards`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BoardFilter {
    All,
    Closed,
    Members,
    Open,
    Organization,
    Public,
    Starred,
}

impl BoardFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Closed => "closed",
            Self::Members => "members",
            Self::Open => "open",
            Self::Organization => "organization",
            Self::Public => "public",
            Self::Starred => "starred",
        }
    }
}

/// Open/closed selector used for lists (and for cards nested in lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListFilter {
    All,
    Closed,
    None,
    Open,
}

impl ListFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Closed => "closed",
            Self::None => "none",
            Self::Open => "open",
        }
    }
}

/// Card selector, which additionally accepts `visible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CardFilter {
    All,
    Closed,
    None,
    Open,
    Visible,
}

impl CardFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Closed => "closed",
            Self::None => "none",
            Self::Open => "open",
            Self::Visible => "visible",
        }
    }
}

/// Checklist inclusion for `get_card`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistFilter {
    All,
    None,
}

impl ChecklistFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::None => "none",
        }
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Validate an identifier that is interpolated into a request path.
///
/// The value must stay a single segment after URL normalization: no
/// separators, no dot segments and no percent escapes.
pub fn path_segment<'a>(field: &str, value: &'a str) -> Result<&'a str, ToolError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "'{field}' must not be empty"
        )));
    }
    if value == "." || value == ".." || value.contains(['/', '\\', '?', '#', '%']) {
        return Err(ToolError::invalid_arguments(format!(
            "'{field}' is not a valid Trello ID: {value}"
        )));
    }
    Ok(value)
}

// ============================================================================
// Deserializers
// ============================================================================

/// Keep explicit `null` apart from an absent field.
///
/// Used with `#[serde(default)]`: absent -> `None`, `null` -> `Some(None)`,
/// a string -> `Some(Some(..))`.
pub fn nullable_string<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Accept a position as `"top"`, `"bottom"`, `"12.5"` or a bare number.
pub fn position<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

// ============================================================================
// Result envelopes
// ============================================================================

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Turn a `json!` object literal into an argument bag.
#[cfg(test)]
pub fn args(value: serde_json::Value) -> rmcp::model::JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
