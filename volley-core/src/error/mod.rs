use thiserror::Error;

use crate::template::TemplateError;

/// Top-level error for building a batch from a descriptor source.
///
/// Everything here is a batch-level setup failure: none of these variants is
/// ever reported as a per-endpoint outcome.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not set; configure a JSON array of endpoints")]
    MissingEndpoints { var: String },
    #[error("endpoint list cannot be empty")]
    EmptyEndpoints,
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse endpoint list as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse endpoint list as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
#[error("endpoint list failed validation ({violations_len} violations)")]
pub struct ValidationError {
    pub violations: Vec<Violation>,
    violations_len: usize,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        let violations_len = violations.len();
        Self {
            violations,
            violations_len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}
