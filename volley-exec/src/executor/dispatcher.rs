use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use serde_json::Value as JsonValue;
use uuid::Uuid;
use volley_core::types::{Endpoint, ExecutionPolicy};

use crate::executor::concurrency::WorkerLimit;
use crate::executor::events::{Event, EventSink};
use crate::executor::http::HttpClient;
use crate::executor::outcome::Outcome;
use crate::executor::report::{BatchReport, ExecMode};
use crate::executor::request::build_request;
use crate::executor::types::DispatcherConfig;

/// Drives one batch: picks the execution mode, fans the descriptors out to a
/// bounded worker pool (or walks them in order), and reassembles the
/// outcomes into an input-ordered report.
pub struct Dispatcher {
    config: DispatcherConfig,
    http: Arc<dyn HttpClient>,
    event_sink: Arc<dyn EventSink>,
}

impl Dispatcher {
    pub fn new(
        config: DispatcherConfig,
        http: Arc<dyn HttpClient>,
        event_sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            http,
            event_sink,
        }
    }

    /// Execute every descriptor and aggregate the outcomes.
    ///
    /// Never fails as a whole: per-endpoint problems become failure outcomes,
    /// and one descriptor's failure never cancels or skips any other.
    pub async fn execute_batch(
        &self,
        endpoints: &[Endpoint],
        policy: &ExecutionPolicy,
        default_payload: Option<&JsonValue>,
    ) -> BatchReport {
        let run_id = Uuid::new_v4();
        let mode = if policy.is_sequential_for(endpoints.len()) {
            ExecMode::Sequential
        } else {
            ExecMode::Parallel
        };

        self.event_sink
            .emit(Event::BatchStarted {
                run_id,
                total: endpoints.len(),
                mode,
            })
            .await;

        let outcomes = match mode {
            ExecMode::Sequential => {
                self.run_sequential(run_id, endpoints, default_payload).await
            }
            ExecMode::Parallel => {
                let workers = policy.effective_workers(endpoints.len());
                self.run_parallel(run_id, endpoints, workers, default_payload)
                    .await
            }
        };

        let report = BatchReport::from_outcomes(run_id, mode, outcomes);
        self.event_sink
            .emit(Event::BatchFinished {
                run_id,
                succeeded: report.successful,
                failed: report.failed,
            })
            .await;
        report
    }

    async fn run_sequential(
        &self,
        run_id: Uuid,
        endpoints: &[Endpoint],
        default_payload: Option<&JsonValue>,
    ) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(endpoints.len());
        for (index, endpoint) in endpoints.iter().enumerate() {
            let outcome = invoke_endpoint(
                self.http.as_ref(),
                self.event_sink.as_ref(),
                &self.config,
                run_id,
                index,
                endpoint,
                default_payload,
            )
            .await;
            outcomes.push(outcome);
        }
        outcomes
    }

    async fn run_parallel(
        &self,
        run_id: Uuid,
        endpoints: &[Endpoint],
        workers: usize,
        default_payload: Option<&JsonValue>,
    ) -> Vec<Outcome> {
        let limit = WorkerLimit::new(workers);
        let mut handles = Vec::with_capacity(endpoints.len());

        for (index, endpoint) in endpoints.iter().enumerate() {
            let permit = limit.acquire().await;
            let http = self.http.clone();
            let event_sink = self.event_sink.clone();
            let config = self.config.clone();
            let endpoint = endpoint.clone();
            let payload = default_payload.cloned();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                invoke_endpoint(
                    http.as_ref(),
                    event_sink.as_ref(),
                    &config,
                    run_id,
                    index,
                    &endpoint,
                    payload.as_ref(),
                )
                .await
            });
            handles.push(handle);
        }

        // Wait for every worker; completion order is irrelevant because each
        // outcome lands in the slot for its original index.
        let mut slots: Vec<Option<Outcome>> = endpoints.iter().map(|_| None).collect();
        for (index, joined) in join_all(handles).await.into_iter().enumerate() {
            let outcome = match joined {
                Ok(outcome) => outcome,
                // A panicked worker must not abort the batch; it becomes a
                // failure outcome for its own index.
                Err(e) => {
                    let endpoint = &endpoints[index];
                    Outcome::from_error(
                        index,
                        &endpoint.url,
                        endpoint.method.as_str(),
                        format!("worker task failed: {e}"),
                    )
                }
            };
            if let Some(slot) = slots.get_mut(outcome.index) {
                *slot = Some(outcome);
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    let endpoint = &endpoints[index];
                    Outcome::from_error(
                        index,
                        &endpoint.url,
                        endpoint.method.as_str(),
                        "internal error: outcome slot was never filled",
                    )
                })
            })
            .collect()
    }
}

/// Invoke one descriptor: exactly one HTTP call, classified into an outcome.
///
/// Build errors (bad URL, unserializable body) and transport errors alike are
/// converted to failure outcomes; nothing propagates to the dispatcher.
#[allow(clippy::too_many_arguments)]
pub async fn invoke_endpoint(
    http: &dyn HttpClient,
    event_sink: &dyn EventSink,
    config: &DispatcherConfig,
    run_id: Uuid,
    index: usize,
    endpoint: &Endpoint,
    default_payload: Option<&JsonValue>,
) -> Outcome {
    event_sink
        .emit(Event::EndpointStarted {
            run_id,
            index,
            endpoint: endpoint.url.clone(),
        })
        .await;

    let outcome = match build_request(endpoint, default_payload) {
        Ok(parts) => {
            let timeout = Duration::from_secs(endpoint.timeout_secs).min(config.timeout_cap);
            match http
                .send(parts, timeout, config.max_response_bytes)
                .await
            {
                Ok(resp) => Outcome::from_response(index, endpoint, resp.status, &resp.body),
                Err(err) => {
                    Outcome::from_error(index, &endpoint.url, endpoint.method.as_str(), err)
                }
            }
        }
        Err(err) => Outcome::from_error(index, &endpoint.url, endpoint.method.as_str(), err),
    };

    event_sink
        .emit(Event::EndpointFinished {
            run_id,
            index,
            endpoint: endpoint.url.clone(),
            succeeded: outcome.is_success(),
            status_code: outcome.status_code,
        })
        .await;

    outcome
}
