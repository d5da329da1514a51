mod rules;
mod validator;

pub use validator::Validator;

use crate::error::ValidationError;
use crate::types::Endpoint;

/// Validate a normalized endpoint list, collecting every violation before
/// reporting.
pub fn validate_endpoints(endpoints: &[Endpoint]) -> Result<(), ValidationError> {
    let mut v = Validator::new();
    for (idx, endpoint) in endpoints.iter().enumerate() {
        rules::validate_endpoint(&mut v, endpoint, &format!("$.endpoints[{idx}]"));
    }
    v.finish()
}
