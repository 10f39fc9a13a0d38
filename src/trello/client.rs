//! Trello REST client.
//!
//! A thin, stateless wrapper around `reqwest` that authenticates every call
//! with the key/token query pair and normalizes responses:
//! - non-2xx statuses become [`ApiError::Status`] with the raw body,
//! - an empty 2xx body becomes `{"success": true}`,
//! - any other 2xx body must be valid JSON.
//!
//! There is no retry, caching or extra timeout layer.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::credentials::Credentials;
use super::error::{ApiError, ApiResult};
use super::request::{Method, OutboundRequest, QueryParams};

/// Default Trello REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Reason phrase for statuses without a canonical one (e.g. 522).
const UNKNOWN_STATUS_TEXT: &str = "Unknown Status";

/// Sends a built request to the remote API.
///
/// Implemented by [`TrelloClient`]; tests substitute an in-memory recorder.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn send(&self, request: &OutboundRequest) -> ApiResult<Value>;
}

/// Authenticated Trello HTTP client.
#[derive(Debug, Clone)]
pub struct TrelloClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl TrelloClient {
    /// Create a client for `base_url` (trailing slashes are trimmed).
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Append the key/token pair to `url`.
    fn authorize(&self, url: &str) -> ApiResult<String> {
        let separator = if url.contains('?') { '&' } else { '?' };
        let mut auth = QueryParams::new();
        auth.set("key", self.credentials.api_key())
            .set("token", self.credentials.token());
        Ok(format!("{url}{separator}{}", auth.encode()?))
    }

    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.request(Method::Get, path, None, HeaderMap::new()).await
    }

    pub async fn post(&self, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        self.request(Method::Post, path, body, HeaderMap::new()).await
    }

    pub async fn put(&self, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        self.request(Method::Put, path, body, HeaderMap::new()).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.request(Method::Delete, path, None, HeaderMap::new()).await
    }

    /// Issue one request. `path` may already carry a query string.
    ///
    /// `Content-Type: application/json` is always sent; entries in `headers`
    /// are merged on top and replace it only when they name it explicitly.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> ApiResult<Value> {
        debug!("Trello request: {} {}", method, path);

        let url = self.authorize(&format!("{}{}", self.base_url, path))?;

        let mut merged = HeaderMap::new();
        merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        merged.extend(headers);

        let mut builder = self.http.request(method.into(), url).headers(merged);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ApiError::encode(e.to_string()))?;
            builder = builder.body(bytes);
        }

        let response = builder.send().await?;
        Self::read_response(response).await
    }

    async fn read_response(response: reqwest::Response) -> ApiResult<Value> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Trello responded with {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or(UNKNOWN_STATUS_TEXT)
                    .to_string(),
                body: text,
            });
        }

        if text.is_empty() {
            return Ok(json!({ "success": true }));
        }

        serde_json::from_str(&text).map_err(ApiError::MalformedResponse)
    }
}

#[async_trait]
impl ApiTransport for TrelloClient {
    async fn send(&self, request: &OutboundRequest) -> ApiResult<Value> {
        let target = request.path_and_query()?;
        self.request(request.method, &target, None, HeaderMap::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::RawQuery,
        http::{HeaderMap as AxumHeaders, StatusCode},
        routing::{get, post},
    };

    async fn spawn_stub() -> String {
        let app = Router::new()
            .route("/empty", get(|| async { StatusCode::OK }))
            .route(
                "/card",
                get(|| async { Json(json!({ "id": "42" })) }),
            )
            .route(
                "/unauthorized",
                get(|| async { (StatusCode::UNAUTHORIZED, "invalid token") }),
            )
            .route(
                "/origin-timeout",
                get(|| async { (StatusCode::from_u16(522).unwrap(), "origin timed out") }),
            )
            .route("/garbage", get(|| async { "not json" }))
            .route("/echo", get(echo).put(echo).delete(echo))
            .route("/echo-body", post(echo_body));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn echo(RawQuery(query): RawQuery, headers: AxumHeaders) -> Json<Value> {
        Json(json!({
            "query": query,
            "content_type": headers.get("content-type").and_then(|v| v.to_str().ok()),
            "x_trace": headers.get("x-trace").and_then(|v| v.to_str().ok()),
        }))
    }

    async fn echo_body(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({ "received": body }))
    }

    fn client(base_url: &str) -> TrelloClient {
        TrelloClient::new(base_url, Credentials::new("k", "t").unwrap())
    }

    #[tokio::test]
    async fn test_empty_body_yields_success_marker() {
        let base = spawn_stub().await;
        let result = client(&base).get("/empty").await.unwrap();
        assert_eq!(result, json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_json_body_passes_through() {
        let base = spawn_stub().await;
        let result = client(&base).get("/card").await.unwrap();
        assert_eq!(result, json!({ "id": "42" }));
    }

    #[tokio::test]
    async fn test_non_2xx_embeds_status_and_body() {
        let base = spawn_stub().await;
        let err = client(&base).get("/unauthorized").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Unauthorized"));
        assert!(msg.contains("invalid token"));
    }

    #[tokio::test]
    async fn test_non_canonical_status_keeps_message_shape() {
        let base = spawn_stub().await;
        let err = client(&base).get("/origin-timeout").await.unwrap_err();
        assert_eq!(err.status(), Some(522));
        assert_eq!(
            err.to_string(),
            "Trello API error: 522 Unknown Status - origin timed out"
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let base = spawn_stub().await;
        let err = client(&base).get("/garbage").await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_auth_appended_with_question_mark() {
        let base = spawn_stub().await;
        let result = client(&base).get("/echo").await.unwrap();
        assert_eq!(result["query"], "key=k&token=t");
        assert_eq!(result["content_type"], "application/json");
    }

    #[tokio::test]
    async fn test_auth_appended_after_existing_query() {
        let base = spawn_stub().await;
        let result = client(&base).put("/echo?closed=true", None).await.unwrap();
        assert_eq!(result["query"], "closed=true&key=k&token=t");
    }

    #[tokio::test]
    async fn test_delete_uses_auth_query() {
        let base = spawn_stub().await;
        let result = client(&base).delete("/echo").await.unwrap();
        assert_eq!(result["query"], "key=k&token=t");
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let base = spawn_stub().await;
        let body = json!({ "name": "Card" });
        let result = client(&base).post("/echo-body", Some(&body)).await.unwrap();
        assert_eq!(result["received"], body);
    }

    #[tokio::test]
    async fn test_caller_headers_are_merged() {
        let base = spawn_stub().await;
        let mut headers = HeaderMap::new();
        headers.insert("x-trace", HeaderValue::from_static("abc"));
        let result = client(&base)
            .request(Method::Get, "/echo", None, headers)
            .await
            .unwrap();
        assert_eq!(result["x_trace"], "abc");
        assert_eq!(result["content_type"], "application/json");
    }

    #[tokio::test]
    async fn test_caller_can_override_content_type() {
        let base = spawn_stub().await;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let result = client(&base)
            .request(Method::Get, "/echo", None, headers)
            .await
            .unwrap();
        assert_eq!(result["content_type"], "text/plain");
    }

    #[tokio::test]
    async fn test_send_encodes_outbound_request() {
        let base = spawn_stub().await;
        let mut query = QueryParams::new();
        query.set("name", "To Do");
        let request = OutboundRequest::put("/echo").with_query(query);
        let result = client(&base).send(&request).await.unwrap();
        assert_eq!(result["query"], "name=To+Do&key=k&token=t");
    }

    #[test]
    fn test_base_url_trimmed() {
        let client = client("https://api.trello.com/1/");
        assert_eq!(client.base_url(), "https://api.trello.com/1");
    }
}
