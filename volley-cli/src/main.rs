use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;
mod utils;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "volley", version, about = "Fan out HTTP calls to configured endpoints")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Run {
            source,
            sequential,
            max_workers,
            payload,
            payload_file,
            events,
            metrics,
            output,
        } => {
            cmd::run::run_cmd(
                &source,
                sequential,
                max_workers,
                payload.as_deref(),
                payload_file.as_deref(),
                &events,
                metrics,
                output,
            )
            .await
        }
        Command::Validate { source, output } => cmd::validate::validate_cmd(&source, output).await,
        Command::Inspect { source, output } => cmd::inspect::inspect_cmd(&source, output).await,
    }
}
