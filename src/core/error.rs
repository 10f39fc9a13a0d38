//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for startup and serving: the
//! Trello client, the transports and configuration. Per-call tool failures
//! never reach it; they become error envelopes.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the Trello client.
    #[error("Trello error: {0}")]
    Api(#[from] crate::trello::ApiError),

    /// Error originating from an MCP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
