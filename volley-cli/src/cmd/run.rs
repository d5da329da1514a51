use std::path::Path;
use std::sync::Arc;

use serde_json::Value as JsonValue;
use volley_core::ExecutionPolicy;
use volley_exec::executor::{
    BatchReport, Dispatcher, DispatcherConfig, EventSink, ExecMode, MetricsCollector,
    MetricsEventSink, NoOpEventSink, ReqwestHttpClient, StdoutEventSink,
};

use crate::args::{OutputArgs, SourceArgs};
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};

use super::source::{load_batch, SourceError};

#[allow(clippy::too_many_arguments)]
pub async fn run_cmd(
    source: &SourceArgs,
    sequential: bool,
    max_workers: Option<usize>,
    payload: Option<&str>,
    payload_file: Option<&Path>,
    events: &str,
    metrics: bool,
    output: OutputArgs,
) -> i32 {
    let default_payload = match load_payload(payload, payload_file) {
        Ok(v) => v,
        Err(msg) => {
            print_error(output.format, output.quiet, &msg);
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let policy = ExecutionPolicy {
        parallel: !sequential,
        max_workers,
    };
    let requested_mode = if policy.parallel {
        ExecMode::Parallel
    } else {
        ExecMode::Sequential
    };

    let config = match load_batch(source) {
        Ok(config) => config,
        Err(SourceError::Usage(msg)) => {
            print_error(output.format, output.quiet, &msg);
            return exit_codes::RUNTIME_ERROR;
        }
        Err(SourceError::Config(e)) => {
            // Descriptor-source failure: one zero-result report carrying a
            // single top-level error, never per-endpoint outcomes.
            let report = BatchReport::setup_failure(requested_mode, e.to_string());
            print_result(output.format, output.quiet, &report);
            return exit_codes::VALIDATION_FAILED;
        }
    };

    let base_sink: Arc<dyn EventSink> = match events {
        "none" => Arc::new(NoOpEventSink),
        "stdout" => Arc::new(StdoutEventSink),
        _ => {
            print_error(
                output.format,
                output.quiet,
                &format!("unknown event sink: {events}"),
            );
            return exit_codes::RUNTIME_ERROR;
        }
    };
    let collector = Arc::new(MetricsCollector::new());
    let event_sink: Arc<dyn EventSink> = if metrics {
        Arc::new(MetricsEventSink::new(collector.clone(), base_sink))
    } else {
        base_sink
    };

    let dispatcher = Dispatcher::new(
        DispatcherConfig::default(),
        Arc::new(ReqwestHttpClient::default()),
        event_sink,
    );
    let report = dispatcher
        .execute_batch(&config.endpoints, &policy, default_payload.as_ref())
        .await;

    if output.format == OutputFormat::Text && !output.quiet {
        println!(
            "Batch {} completed ({})",
            report.run_id,
            report.execution_mode.as_str()
        );
        println!("  Succeeded: {}", report.successful);
        println!("  Failed: {}", report.failed);
        for outcome in &report.errors {
            println!(
                "    {}: {}",
                outcome.endpoint,
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    } else {
        print_result(output.format, output.quiet, &report);
    }

    if metrics {
        let snapshot = collector.get_metrics().await;
        print_result(output.format, output.quiet, &snapshot.to_json());
    }

    if report.failed > 0 {
        exit_codes::RUN_FAILED
    } else {
        exit_codes::SUCCESS
    }
}

fn load_payload(
    inline: Option<&str>,
    file: Option<&Path>,
) -> Result<Option<JsonValue>, String> {
    match (inline, file) {
        (Some(_), Some(_)) => Err("--payload and --payload-file are mutually exclusive".to_string()),
        (Some(raw), None) => serde_json::from_str(raw)
            .map(Some)
            .map_err(|e| format!("invalid --payload JSON: {e}")),
        (None, Some(path)) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| format!("invalid payload JSON in {}: {e}", path.display()))
        }
        (None, None) => Ok(None),
    }
}
