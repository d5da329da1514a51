#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod parser;
pub mod template;
pub mod types;
pub mod validate;

pub use crate::config::{BatchConfig, ENDPOINTS_VAR};
pub use crate::error::{ConfigError, ParseError, ValidationError, Violation};
pub use crate::parser::{parse_endpoints_str, ParsedEndpoints, SourceFormat};
pub use crate::template::{EnvVars, MapVars, TemplateError, VarSource};
pub use crate::types::{Body, Endpoint, EndpointDef, EndpointSpec, ExecutionPolicy, Method};
pub use crate::validate::validate_endpoints;
