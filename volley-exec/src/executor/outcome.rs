use serde_json::Value as JsonValue;
use volley_core::types::Endpoint;

use crate::executor::response::interpret_body;

/// Result of invoking one descriptor. Created once by the invoker, consumed
/// once when the report is assembled.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Outcome {
    /// Original position in the input list; the key that makes
    /// order-preservation possible under concurrency.
    #[serde(skip)]
    pub index: usize,
    pub endpoint: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<JsonValue>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    /// A completed HTTP response is a success at this layer, whatever its
    /// status code; the status is captured as-is for the caller to judge.
    pub fn from_response(index: usize, endpoint: &Endpoint, status: u16, body: &[u8]) -> Self {
        Self {
            index,
            endpoint: endpoint.url.clone(),
            method: endpoint.method.as_str().to_string(),
            status_code: Some(status),
            response: Some(interpret_body(body)),
            timestamp: now_rfc3339(),
            error: None,
        }
    }

    pub fn from_error(
        index: usize,
        endpoint: &str,
        method: &str,
        error: impl ToString,
    ) -> Self {
        Self {
            index,
            endpoint: endpoint.to_string(),
            method: method.to_string(),
            status_code: None,
            response: None,
            timestamp: now_rfc3339(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

fn now_rfc3339() -> String {
    chrono::Local::now().to_rfc3339()
}
