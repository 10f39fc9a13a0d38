//! Trello credential context.
//!
//! Every outbound request is authenticated with an API key and a user token.
//! Both are loaded once at startup and never change afterwards.

use super::error::{ApiError, ApiResult};

/// Environment variable holding the Trello API key.
pub const API_KEY_VAR: &str = "TRELLO_API_KEY";

/// Environment variable holding the Trello user token.
pub const TOKEN_VAR: &str = "TRELLO_TOKEN";

/// Where to obtain an API key.
pub const API_KEY_URL: &str = "https://trello.com/power-ups/admin";

/// Where to generate a token for a given API key.
pub const TOKEN_URL: &str = "https://trello.com/1/authorize?expiration=never&scope=read,write&response_type=token&name=MCP-Server&key=YOUR_API_KEY";

/// The pair of secrets authenticating every Trello request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    token: String,
}

impl Credentials {
    /// Build credentials from an API key and token.
    ///
    /// Blank values are rejected: an unauthenticated client is never built.
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> ApiResult<Self> {
        let api_key = api_key.into();
        let token = token.into();

        let mut missing = Vec::new();
        if api_key.trim().is_empty() {
            missing.push(API_KEY_VAR);
        }
        if token.trim().is_empty() {
            missing.push(TOKEN_VAR);
        }
        if !missing.is_empty() {
            return Err(ApiError::missing_credentials(&missing));
        }

        Ok(Self { api_key, token })
    }

    /// Build credentials from optional values, as read from the environment.
    pub fn from_parts(api_key: Option<&str>, token: Option<&str>) -> ApiResult<Self> {
        Self::new(api_key.unwrap_or_default(), token.unwrap_or_default())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Guidance printed when credentials are missing at startup.
    pub fn setup_help() -> Vec<String> {
        vec![
            "Required environment variables:".to_string(),
            format!("  {API_KEY_VAR} - Your Trello API key"),
            format!("  {TOKEN_VAR}   - Your Trello auth token"),
            format!("Get your API key from: {API_KEY_URL}"),
            format!("Generate a token from: {TOKEN_URL}"),
        ]
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
