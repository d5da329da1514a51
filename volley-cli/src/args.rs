use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct SourceArgs {
    /// Read the endpoint list from a JSON or YAML file instead of the
    /// environment.
    #[arg(long, value_name = "FILE")]
    pub endpoints: Option<PathBuf>,
    /// Environment variable holding the endpoint list.
    #[arg(long, default_value = "ENDPOINTS", value_name = "NAME")]
    pub endpoints_var: String,
    /// Template variable override, looked up before the environment.
    #[arg(long = "set", value_name = "VAR=VALUE")]
    pub set_vars: Vec<String>,
}
