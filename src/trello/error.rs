//! Trello client error types.

use thiserror::Error;

/// Result type for Trello API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while talking to the Trello REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or both credentials are absent.
    #[error("Missing Trello credentials: {0}")]
    MissingCredentials(String),

    /// Trello answered with a non-2xx status.
    #[error("Trello API error: {status} {status_text} - {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    /// A 2xx response whose body is not valid JSON.
    #[error("Malformed Trello response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The request body or query could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Network-level failure (DNS, connect, TLS, reading the body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// Create a missing credentials error naming the absent variables.
    pub fn missing_credentials(vars: &[&str]) -> Self {
        Self::MissingCredentials(vars.join(", "))
    }

    /// Create an encode error.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// HTTP status code when the error came from a Trello response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
