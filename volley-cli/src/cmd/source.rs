use volley_core::template::{EnvVars, MapVars, VarSource};
use volley_core::{BatchConfig, ConfigError, SourceFormat};

use crate::args::SourceArgs;
use crate::exit_codes;

/// `--set` overrides win over the process environment.
pub struct OverlayVars {
    overrides: MapVars,
    env: EnvVars,
}

impl OverlayVars {
    pub fn new(overrides: MapVars) -> Self {
        Self {
            overrides,
            env: EnvVars,
        }
    }
}

impl VarSource for OverlayVars {
    fn get(&self, name: &str) -> Option<String> {
        self.overrides.get(name).or_else(|| self.env.get(name))
    }
}

#[derive(Debug)]
pub enum SourceError {
    /// Bad flags or unreadable file.
    Usage(String),
    /// The descriptor source itself failed: missing variable, unresolved
    /// template, invalid list, validation violations.
    Config(ConfigError),
}

impl SourceError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SourceError::Usage(_) => exit_codes::RUNTIME_ERROR,
            SourceError::Config(_) => exit_codes::VALIDATION_FAILED,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SourceError::Usage(msg) => msg.clone(),
            SourceError::Config(e) => e.to_string(),
        }
    }
}

pub fn parse_set_vars(set_vars: &[String]) -> Result<MapVars, String> {
    let mut vars = MapVars::default();
    for pair in set_vars {
        match pair.split_once('=') {
            Some((name, value)) if !name.is_empty() => vars.set(name, value),
            _ => return Err(format!("invalid --set value (expected VAR=VALUE): {pair}")),
        }
    }
    Ok(vars)
}

/// Load, resolve, normalize, and validate the endpoint batch exactly once.
pub fn load_batch(source: &SourceArgs) -> Result<BatchConfig, SourceError> {
    let overrides = parse_set_vars(&source.set_vars).map_err(SourceError::Usage)?;
    let vars = OverlayVars::new(overrides);

    match &source.endpoints {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                SourceError::Usage(format!("failed to read {}: {e}", path.display()))
            })?;
            BatchConfig::from_source(&raw, SourceFormat::Auto, &vars).map_err(SourceError::Config)
        }
        None => {
            BatchConfig::from_var(&source.endpoints_var, &vars).map_err(SourceError::Config)
        }
    }
}
