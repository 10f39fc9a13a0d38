//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! a `.env` file, environment variables, or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::trello::{API_KEY_VAR, ApiResult, Credentials, DEFAULT_BASE_URL, TOKEN_VAR};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Trello API access.
    pub trello: TrelloConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Trello API configuration.
///
/// Credentials stay optional here so a config can be built and inspected
/// without them; [`TrelloConfig::credentials`] is the startup gate.
#[derive(Clone, Serialize, Deserialize)]
pub struct TrelloConfig {
    /// REST API base URL.
    pub base_url: String,

    /// API key. Get one at: https://trello.com/power-ups/admin
    pub api_key: Option<String>,

    /// User token authorizing the key.
    pub token: Option<String>,
}

impl TrelloConfig {
    /// Validated credentials, or the names of the missing variables.
    pub fn credentials(&self) -> ApiResult<Credentials> {
        Credentials::from_parts(self.api_key.as_deref(), self.token.as_deref())
    }

    /// Startup check: the credentials, or the lines to print before exiting.
    ///
    /// The first line names the missing variables; the rest explain where to
    /// obtain each secret.
    pub fn check_credentials(&self) -> std::result::Result<Credentials, Vec<String>> {
        self.credentials().map_err(|e| {
            let mut lines = vec![e.to_string()];
            lines.extend(Credentials::setup_help());
            lines
        })
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            token: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "trello-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            trello: TrelloConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a `.env` file and environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...); Trello settings use
    /// `TRELLO_API_KEY`, `TRELLO_TOKEN` and `TRELLO_API_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.trello.api_key = std::env::var(API_KEY_VAR).ok();
        config.trello.token = std::env::var(TOKEN_VAR).ok();

        if let Ok(base_url) = std::env::var("TRELLO_API_BASE_URL") {
            info!("Using Trello API base URL from environment: {}", base_url);
            config.trello.base_url = base_url;
        }

        config
    }

    /// Check settings that would otherwise only fail on the first tool call.
    pub fn validate(&self) -> Result<()> {
        let base_url = self.trello.base_url.as_str();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(Error::config(format!(
                "TRELLO_API_BASE_URL must be an http(s) URL, got '{base_url}'"
            )));
        }
        Ok(())
    }
}
