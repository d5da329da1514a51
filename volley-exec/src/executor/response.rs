use serde_json::Value as JsonValue;

/// Interpret a response body: structured JSON when it parses, raw text
/// otherwise. An unparseable body is not an error.
pub fn interpret_body(body: &[u8]) -> JsonValue {
    match std::str::from_utf8(body) {
        Ok(text) => serde_json::from_str::<JsonValue>(text)
            .unwrap_or_else(|_| JsonValue::String(text.to_string())),
        Err(_) => JsonValue::String(String::from_utf8_lossy(body).into_owned()),
    }
}
