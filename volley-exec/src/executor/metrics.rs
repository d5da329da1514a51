use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::executor::{Event, EventSink};

#[derive(Debug, Clone, Default)]
pub struct BatchMetrics {
    pub run_id: String,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
    pub total_duration: Option<Duration>,
    pub endpoints_total: usize,
    pub endpoints_succeeded: usize,
    pub endpoints_failed: usize,
    pub http_requests: usize,
}

impl BatchMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Some(Instant::now()),
            ..Default::default()
        }
    }

    pub fn record_request(&mut self) {
        self.http_requests += 1;
    }

    pub fn record_success(&mut self) {
        self.endpoints_succeeded += 1;
    }

    pub fn record_failure(&mut self) {
        self.endpoints_failed += 1;
    }

    pub fn finish(&mut self, run_id: String, total: usize) {
        self.run_id = run_id;
        self.endpoints_total = total;
        self.finished_at = Some(Instant::now());
        if let (Some(started), Some(finished)) = (self.started_at, self.finished_at) {
            self.total_duration = Some(finished.duration_since(started));
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "run_id": self.run_id,
            "duration_ms": self.total_duration.map(|d| d.as_millis() as u64),
            "endpoints": {
                "total": self.endpoints_total,
                "succeeded": self.endpoints_succeeded,
                "failed": self.endpoints_failed,
            },
            "http_requests": self.http_requests,
        })
    }
}

pub struct MetricsCollector {
    metrics: Arc<Mutex<BatchMetrics>>,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(Mutex::new(BatchMetrics::new())),
        }
    }

    pub async fn get_metrics(&self) -> BatchMetrics {
        self.metrics.lock().await.clone()
    }
}

/// Decorator sink: updates counters from the event stream, then forwards to
/// the wrapped sink.
pub struct MetricsEventSink {
    collector: Arc<MetricsCollector>,
    base: Arc<dyn EventSink>,
}

impl MetricsEventSink {
    pub fn new(collector: Arc<MetricsCollector>, base: Arc<dyn EventSink>) -> Self {
        Self { collector, base }
    }
}

#[async_trait]
impl EventSink for MetricsEventSink {
    async fn emit(&self, event: Event) {
        {
            let mut metrics = self.collector.metrics.lock().await;
            match &event {
                Event::EndpointStarted { .. } => metrics.record_request(),
                Event::EndpointFinished { succeeded, .. } => {
                    if *succeeded {
                        metrics.record_success();
                    } else {
                        metrics.record_failure();
                    }
                }
                Event::BatchFinished { run_id, succeeded, failed } => {
                    let total = succeeded + failed;
                    metrics.finish(run_id.to_string(), total);
                }
                Event::BatchStarted { .. } => {}
            }
        }

        self.base.emit(event).await;
    }
}
