use std::collections::BTreeMap;

use serde_json::Value as JsonValue;
use volley_core::types::{Body, Endpoint};

#[derive(Debug, Clone)]
pub struct HttpRequestParts {
    pub method: String,
    pub url: url::Url,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BuildError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("failed to serialize request body: {0}")]
    Serialize(String),
}

/// Assemble the wire-level request for one descriptor.
///
/// The descriptor's own body always wins; the caller-supplied default payload
/// is used only when the descriptor defines none, and is always sent as JSON.
pub fn build_request(
    endpoint: &Endpoint,
    default_payload: Option<&JsonValue>,
) -> Result<HttpRequestParts, BuildError> {
    let mut url =
        url::Url::parse(&endpoint.url).map_err(|e| BuildError::InvalidUrl(e.to_string()))?;

    if !endpoint.params.is_empty() {
        let mut qp = url.query_pairs_mut();
        for (k, v) in &endpoint.params {
            qp.append_pair(k, v);
        }
    }

    let mut headers = endpoint.headers.clone();

    let body = endpoint
        .body
        .clone()
        .or_else(|| default_payload.map(|p| Body::Json(p.clone())));

    let body = match body {
        Some(Body::Json(value)) => {
            let bytes =
                serde_json::to_vec(&value).map_err(|e| BuildError::Serialize(e.to_string()))?;
            if !has_content_type(&headers) {
                headers.insert("Content-Type".to_string(), "application/json".to_string());
            }
            Some(bytes)
        }
        Some(Body::Raw(text)) => Some(text.into_bytes()),
        None => None,
    };

    Ok(HttpRequestParts {
        method: endpoint.method.as_str().to_string(),
        url,
        headers,
        body,
    })
}

fn has_content_type(headers: &BTreeMap<String, String>) -> bool {
    headers.keys().any(|k| k.eq_ignore_ascii_case("content-type"))
}
