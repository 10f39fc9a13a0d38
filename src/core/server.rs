//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the
//! [`ToolDispatcher`].
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool is a pure request builder registered in `registry.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::definitions::common::error_result;
use crate::domains::tools::{ToolDispatcher, ToolError, ToolRegistry};
use crate::trello::{ApiTransport, TrelloClient};

const INSTRUCTIONS: &str = "Trello MCP server. Use list_boards to discover boards, \
     list_lists and list_cards to browse them, and the card tools to create, update, \
     move, comment on, archive or delete cards. IDs come from earlier tool results.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It holds no
/// mutable state: every tool call is independent.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Resolves, builds, sends and wraps tool calls.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a server talking to Trello with the configured credentials.
    ///
    /// Fails when either credential is missing: the server never runs
    /// unauthenticated.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let credentials = config.trello.credentials()?;
        let client = TrelloClient::new(config.trello.base_url.clone(), credentials);
        Ok(Self::with_transport(config, Arc::new(client)))
    }

    /// Create a server on top of any Trello transport.
    pub fn with_transport(config: Config, transport: Arc<dyn ApiTransport>) -> Self {
        let registry = Arc::new(ToolRegistry::new());
        info!("Registered {} tools", registry.len());

        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(registry, transport),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// The tool catalog as JSON (for HTTP transport).
    pub fn tool_catalog(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .registry()
            .tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name and return the serialized envelope (for HTTP transport).
    ///
    /// `null` stands for "no arguments"; any other non-object bag is
    /// rejected without building a request.
    pub async fn invoke_tool(&self, name: &str, arguments: serde_json::Value) -> serde_json::Value {
        let result = match arguments {
            serde_json::Value::Object(map) => self.dispatcher.call(name, map).await,
            serde_json::Value::Null => self.dispatcher.call(name, JsonObject::new()).await,
            _ => error_result(
                &ToolError::invalid_arguments(format!("{name}: expected an object")).to_string(),
            ),
        };
        serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        })
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.registry().tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.dispatcher.call(&request.name, arguments).await)
    }
}
