use serde::Serialize;
use volley_core::ConfigError;

use crate::args::{OutputArgs, SourceArgs};
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};

use super::source::{load_batch, SourceError};

#[derive(Serialize)]
struct ValidateResult {
    valid: bool,
    endpoints: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<ViolationOut>,
}

#[derive(Serialize)]
struct ViolationOut {
    path: String,
    message: String,
}

pub async fn validate_cmd(source: &SourceArgs, output: OutputArgs) -> i32 {
    match load_batch(source) {
        Ok(config) => {
            if output.format == OutputFormat::Text && !output.quiet {
                println!("configuration valid: {} endpoints", config.endpoints.len());
            } else {
                print_result(
                    output.format,
                    output.quiet,
                    &ValidateResult {
                        valid: true,
                        endpoints: config.endpoints.len(),
                        violations: Vec::new(),
                    },
                );
            }
            exit_codes::SUCCESS
        }
        Err(SourceError::Config(ConfigError::Validation(e))) => {
            if output.format == OutputFormat::Text {
                for violation in &e.violations {
                    print_error(
                        output.format,
                        output.quiet,
                        &format!("{}: {}", violation.path, violation.message),
                    );
                }
            } else {
                print_result(
                    output.format,
                    output.quiet,
                    &ValidateResult {
                        valid: false,
                        endpoints: 0,
                        violations: e
                            .violations
                            .iter()
                            .map(|v| ViolationOut {
                                path: v.path.clone(),
                                message: v.message.clone(),
                            })
                            .collect(),
                    },
                );
            }
            exit_codes::VALIDATION_FAILED
        }
        Err(e) => {
            print_error(output.format, output.quiet, &e.message());
            e.exit_code()
        }
    }
}
