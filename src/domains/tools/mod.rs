//! Tools domain module.
//!
//! This module exposes the Trello REST API as MCP tools. Each tool is a pure
//! request builder; the dispatcher sends the built request and wraps the
//! response in a result envelope.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool builders (one file per tool)
//! - `handlers.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Ordered tool catalog and name lookup
//! - `dispatch.rs` - Build, send and wrap a single tool call
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/<resource>/` (e.g., `create_label.rs`)
//! 2. Define the params struct and implement `ToolHandler`
//! 3. Export it from the resource `mod.rs` and `definitions/mod.rs`
//! 4. Add a `ToolDescriptor::of::<YourTool>()` line in `registry.rs`
//!
//! The server and transports pick the tool up from the registry.

pub mod definitions;
mod dispatch;
mod error;
mod handlers;
mod registry;

pub use dispatch::ToolDispatcher;
pub use error::ToolError;
pub use handlers::ToolHandler;
pub use registry::{BuildFn, ToolDescriptor, ToolRegistry};

#[cfg(test)]
pub(crate) use dispatch::tests::RecordingTransport;
