use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use crate::types::Method;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// One entry of the configured endpoint list, as written by the operator.
///
/// A bare string is shorthand for a POST to that URL with no headers and no
/// body; the structured form carries the full request description.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum EndpointSpec {
    Url(String),
    Full(EndpointDef),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EndpointDef {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    /// Raw payload. A JSON string is sent verbatim; any other JSON value is
    /// sent JSON-encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<JsonValue>,

    /// Structured payload, always JSON-encoded. Takes precedence over `body`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<JsonValue>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

/// Request payload with the transmission encoding already decided.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// JSON-encoded on the wire, with JSON content negotiation.
    Json(JsonValue),
    /// Opaque bytes on the wire, no implicit encoding.
    Raw(String),
}

/// Canonical descriptor of one HTTP call, immutable during execution.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub url: String,
    pub method: Method,
    pub headers: BTreeMap<String, String>,
    pub params: BTreeMap<String, String>,
    pub body: Option<Body>,
    pub timeout_secs: u64,
}

impl Endpoint {
    /// Shorthand descriptor equivalent to a bare-URL list entry.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Post,
            headers: BTreeMap::new(),
            params: BTreeMap::new(),
            body: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl EndpointSpec {
    /// Resolve the heterogeneous input shape into the canonical descriptor.
    ///
    /// `json` beats `body` when both are present; a string-valued `body` is
    /// an opaque payload, anything else is structured.
    pub fn normalize(self) -> Endpoint {
        match self {
            EndpointSpec::Url(url) => Endpoint::new(url),
            EndpointSpec::Full(def) => {
                let body = match (def.json, def.body) {
                    (Some(json), _) => Some(Body::Json(json)),
                    (None, Some(JsonValue::String(raw))) => Some(Body::Raw(raw)),
                    (None, Some(other)) => Some(Body::Json(other)),
                    (None, None) => None,
                };
                Endpoint {
                    url: def.url,
                    method: def.method.unwrap_or_default(),
                    headers: def.headers,
                    params: def.params,
                    body,
                    timeout_secs: def.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
                }
            }
        }
    }
}
