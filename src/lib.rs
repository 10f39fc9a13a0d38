//! Trello MCP Server Library
//!
//! This crate exposes a fixed catalog of Trello REST operations as Model
//! Context Protocol (MCP) tools. Each tool call is validated, translated into
//! a single authenticated HTTP request and answered with Trello's JSON
//! response, pretty-printed, or an error envelope.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool catalog, request builders and dispatch
//! - **trello**: Credentials, request model and the authenticated REST client
//!
//! # Example
//!
//! ```rust,no_run
//! use trello_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod trello;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
