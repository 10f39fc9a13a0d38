//! Trello REST API access.
//!
//! - `credentials` - the key/token pair authenticating every call
//! - `request` - the outbound request model produced by tool builders
//! - `client` - the HTTP client that sends requests and normalizes responses

mod client;
mod credentials;
mod error;
mod request;

pub use client::{ApiTransport, DEFAULT_BASE_URL, TrelloClient};
pub use credentials::{API_KEY_VAR, Credentials, TOKEN_VAR};
pub use error::{ApiError, ApiResult};
pub use request::{Method, OutboundRequest, QueryParams};
