//! Tool handler trait.
//!
//! Every Trello tool is a request builder: it declares its name, description
//! and parameter type, and turns validated parameters into an
//! [`OutboundRequest`]. Builders are pure, so they are tested without a
//! network.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::ToolError;
use crate::trello::OutboundRequest;

/// A tool that maps an argument bag to one Trello request.
pub trait ToolHandler {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed parameters; their JSON Schema is the advertised input schema.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Translate validated parameters into a request.
    fn build(params: &Self::Params) -> Result<OutboundRequest, ToolError>;

    /// Validate a raw argument bag against the parameter type.
    ///
    /// Missing required fields, wrong types and values outside an
    /// enumeration are all rejected here.
    fn parse(arguments: JsonObject) -> Result<Self::Params, ToolError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", Self::NAME, e)))
    }

    /// Parse then build.
    fn build_from_args(arguments: JsonObject) -> Result<OutboundRequest, ToolError> {
        let params = Self::parse(arguments)?;
        Self::build(&params)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
