//! Outbound request model.
//!
//! Tool builders produce an [`OutboundRequest`] without touching the network;
//! the client turns it into an authenticated HTTP call.

use std::fmt;

use super::error::{ApiError, ApiResult};

/// HTTP methods used against the Trello API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Ordered query parameters.
///
/// Insertion order is kept so URLs are deterministic. Setting an existing
/// key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
        self
    }

    /// Set `key` only when a value is present.
    pub fn set_opt(&mut self, key: &str, value: Option<impl Into<String>>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Set a boolean as the literal `"true"` / `"false"`.
    pub fn set_bool(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        self.set_opt(key, value.map(|v| v.to_string()))
    }

    /// Set a list as a comma-joined string, keeping order and duplicates.
    pub fn set_list(&mut self, key: &str, values: Option<&[String]>) -> &mut Self {
        self.set_opt(key, values.map(|v| v.join(",")))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-urlencode the parameters, in insertion order.
    pub fn encode(&self) -> ApiResult<String> {
        serde_urlencoded::to_string(&self.0).map_err(|e| ApiError::encode(e.to_string()))
    }
}

/// A fully described Trello request, minus authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
}

impl OutboundRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Replace the query parameters.
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Path plus encoded query string, e.g. `/boards/abc?lists=open`.
    pub fn path_and_query(&self) -> ApiResult<String> {
        if self.query.is_empty() {
            return Ok(self.path.clone());
        }
        Ok(format!("{}?{}", self.path, self.query.encode()?))
    }
}
