use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute the configured endpoint batch and print the aggregate report.
    Run {
        #[command(flatten)]
        source: SourceArgs,
        /// Execute endpoints one at a time, in list order.
        #[arg(long)]
        sequential: bool,
        /// Worker bound for parallel execution (default: min(10, endpoints)).
        #[arg(long)]
        max_workers: Option<usize>,
        /// Default JSON payload for endpoints that define no body.
        #[arg(long)]
        payload: Option<String>,
        /// Read the default payload from a JSON file.
        #[arg(long, value_name = "FILE")]
        payload_file: Option<PathBuf>,
        /// Per-endpoint event stream: stdout or none.
        #[arg(long, default_value = "none")]
        events: String,
        /// Print batch metrics after the report.
        #[arg(long)]
        metrics: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check the endpoint configuration without performing any calls.
    Validate {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the resolved endpoint list (sensitive header values redacted).
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}
