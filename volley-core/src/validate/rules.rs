use crate::types::{Endpoint, MAX_TIMEOUT_SECS};
use crate::validate::validator::{Validator, HEADER_NAME_RE};

pub(crate) fn validate_endpoint(v: &mut Validator, endpoint: &Endpoint, path: &str) {
    validate_url(v, &endpoint.url, &format!("{path}.url"));
    validate_timeout(v, endpoint.timeout_secs, &format!("{path}.timeout"));

    for name in endpoint.headers.keys() {
        if !HEADER_NAME_RE.is_match(name) {
            v.push(
                format!("{path}.headers.{name}"),
                "header name contains characters that are not valid in an HTTP field name",
            );
        }
    }

    for name in endpoint.params.keys() {
        if name.is_empty() {
            v.push(
                format!("{path}.params"),
                "query parameter name must not be empty",
            );
        }
    }
}

fn validate_url(v: &mut Validator, raw: &str, path: &str) {
    if raw.trim().is_empty() {
        v.push(path, "url must not be empty");
        return;
    }
    match url::Url::parse(raw) {
        Ok(parsed) => {
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                v.push(path, "url scheme must be http or https");
            }
        }
        Err(e) => v.push(path, format!("not a valid URL: {e}")),
    }
}

fn validate_timeout(v: &mut Validator, timeout_secs: u64, path: &str) {
    if timeout_secs == 0 {
        v.push(path, "timeout must be a positive number of seconds");
    } else if timeout_secs > MAX_TIMEOUT_SECS {
        v.push(
            path,
            format!("timeout must not exceed {MAX_TIMEOUT_SECS} seconds"),
        );
    }
}
