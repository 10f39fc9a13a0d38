//! Tool dispatch.
//!
//! Resolves a tool by name, builds its request, sends it through the Trello
//! transport and wraps the outcome in a `CallToolResult`. Every failure is
//! returned as an error envelope; nothing propagates to the MCP transport.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject};
use serde_json::Value;
use tracing::{info, instrument};

use super::definitions::common::{error_result, success_result};
use super::{ToolError, ToolRegistry};
use crate::trello::ApiTransport;

/// Stateless front-end shared by all transports.
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
    transport: Arc<dyn ApiTransport>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>, transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            registry,
            transport,
        }
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Build and send the request for `name`, returning Trello's JSON.
    pub async fn invoke(&self, name: &str, arguments: JsonObject) -> Result<Value, ToolError> {
        let request = self.registry.build(name, arguments)?;
        info!("{} -> {} {}", name, request.method, request.path);
        Ok(self.transport.send(&request).await?)
    }

    /// Run a tool call and convert the outcome into an envelope.
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        let outcome = self.invoke(name, arguments).await.and_then(|payload| {
            serde_json::to_string_pretty(&payload).map_err(|e| ToolError::internal(e.to_string()))
        });

        match outcome {
            Ok(text) => success_result(text),
            Err(e) => error_result(&e.to_string()),
        }
    }
}

impl std::fmt::Debug for ToolDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDispatcher")
            .field("tools", &self.registry.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::args;
    use crate::trello::{ApiError, ApiResult, OutboundRequest};
    use async_trait::async_trait;
    use rmcp::model::RawContent;
    use serde_json::json;
    use std::sync::Mutex;

    /// In-memory transport that records requests and replays one response.
    pub(crate) struct RecordingTransport {
        pub requests: Mutex<Vec<OutboundRequest>>,
        respond: fn() -> ApiResult<Value>,
    }

    impl RecordingTransport {
        pub(crate) fn replying(respond: fn() -> ApiResult<Value>) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                respond,
            })
        }

        pub(crate) fn sent(&self) -> Vec<OutboundRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ApiTransport for RecordingTransport {
        async fn send(&self, request: &OutboundRequest) -> ApiResult<Value> {
            self.requests.lock().unwrap().push(request.clone());
            (self.respond)()
        }
    }

    fn dispatcher(transport: Arc<RecordingTransport>) -> ToolDispatcher {
        ToolDispatcher::new(Arc::new(ToolRegistry::new()), transport)
    }

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_success_is_pretty_json() {
        let transport = RecordingTransport::replying(|| Ok(json!({ "id": "42" })));
        let result = dispatcher(transport.clone())
            .call("get_card", args(json!({ "card_id": "c1" })))
            .await;

        assert_ne!(result.is_error, Some(true));
        assert_eq!(text(&result), "{\n  \"id\": \"42\"\n}");
        assert_eq!(transport.sent().len(), 1);
        assert_eq!(transport.sent()[0].path, "/cards/c1");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_envelope() {
        let transport = RecordingTransport::replying(|| Ok(json!({})));
        let result = dispatcher(transport.clone())
            .call("create_board", args(json!({ "name": "x" })))
            .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Error: Unknown tool: create_board");
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_list_cards_without_ids_sends_nothing() {
        let transport = RecordingTransport::replying(|| Ok(json!([])));
        let result = dispatcher(transport.clone())
            .call("list_cards", args(json!({ "filter": "open" })))
            .await;

        assert_eq!(result.is_error, Some(true));
        assert!(text(&result).contains("Either board_id or list_id is required"));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_enum_violations_send_nothing() {
        let transport = RecordingTransport::replying(|| Ok(json!({})));
        let dispatcher = dispatcher(transport.clone());
        let cases = [
            ("list_boards", json!({ "filter": "archived" })),
            ("get_board", json!({ "board_id": "b1", "lists": "visible" })),
            ("get_board", json!({ "board_id": "b1", "cards": "hidden" })),
            ("list_lists", json!({ "board_id": "b1", "filter": "visible" })),
            ("list_lists", json!({ "board_id": "b1", "cards": "visible" })),
            ("list_cards", json!({ "board_id": "b1", "filter": "starred" })),
            ("get_card", json!({ "card_id": "c1", "checklists": "open" })),
        ];

        for (name, bag) in cases {
            let result = dispatcher.call(name, args(bag)).await;
            assert_eq!(result.is_error, Some(true), "{name} should be rejected");
            assert!(text(&result).starts_with("Error: Invalid arguments"));
        }
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_remote_error_text_preserved() {
        let transport = RecordingTransport::replying(|| {
            Err(ApiError::Status {
                status: 401,
                status_text: "Unauthorized".to_string(),
                body: "invalid token".to_string(),
            })
        });
        let result = dispatcher(transport)
            .call("list_boards", args(json!({})))
            .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text(&result),
            "Error: Trello API error: 401 Unauthorized - invalid token"
        );
    }

    #[tokio::test]
    async fn test_invoke_returns_raw_payload() {
        let transport = RecordingTransport::replying(|| Ok(json!({ "success": true })));
        let payload = dispatcher(transport.clone())
            .invoke("delete_card", args(json!({ "card_id": "c1" })))
            .await
            .unwrap();

        assert_eq!(payload, json!({ "success": true }));
        assert_eq!(transport.sent()[0].method.as_str(), "DELETE");
    }

    #[tokio::test]
    async fn test_calls_are_independent() {
        let transport = RecordingTransport::replying(|| Ok(json!({ "ok": 1 })));
        let dispatcher = dispatcher(transport.clone());

        let failed = dispatcher.call("nope", JsonObject::new()).await;
        let worked = dispatcher
            .call("list_lists", args(json!({ "board_id": "b1" })))
            .await;

        assert_eq!(failed.is_error, Some(true));
        assert_ne!(worked.is_error, Some(true));
        assert_eq!(transport.sent().len(), 1);
    }
}
