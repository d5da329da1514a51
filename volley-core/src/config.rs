//! Load-once descriptor source.
//!
//! The batch configuration is built exactly once at process start: resolve
//! `${VAR}` references in the raw string, parse the endpoint list, normalize
//! every entry to the canonical shape, and validate. The product is an
//! immutable `BatchConfig` handed to the execution engine; any failure here
//! is a batch-level setup failure, never a per-endpoint outcome.

use crate::error::ConfigError;
use crate::parser::{parse_endpoints_str, SourceFormat};
use crate::template::{self, VarSource};
use crate::types::{Endpoint, EndpointSpec};
use crate::validate::validate_endpoints;

/// Variable holding the endpoint list in the environment.
pub const ENDPOINTS_VAR: &str = "ENDPOINTS";

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub endpoints: Vec<Endpoint>,
}

impl BatchConfig {
    /// Load from the `ENDPOINTS` variable of `vars`.
    pub fn from_env(vars: &dyn VarSource) -> Result<Self, ConfigError> {
        Self::from_var(ENDPOINTS_VAR, vars)
    }

    /// Load from a named variable of `vars`. The value must be a JSON array.
    pub fn from_var(var: &str, vars: &dyn VarSource) -> Result<Self, ConfigError> {
        let raw = vars
            .get(var)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEndpoints {
                var: var.to_string(),
            })?;
        Self::from_source(&raw, SourceFormat::Json, vars)
    }

    /// Build from a raw endpoint-list string in the given format.
    pub fn from_source(
        input: &str,
        format: SourceFormat,
        vars: &dyn VarSource,
    ) -> Result<Self, ConfigError> {
        let resolved = template::resolve(input, vars)?;
        let parsed = parse_endpoints_str(&resolved, format)?;
        if parsed.endpoints.is_empty() {
            return Err(ConfigError::EmptyEndpoints);
        }

        let endpoints: Vec<Endpoint> = parsed
            .endpoints
            .into_iter()
            .map(EndpointSpec::normalize)
            .collect();
        validate_endpoints(&endpoints)?;

        Ok(Self { endpoints })
    }
}
