use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::executor::report::ExecMode;

#[derive(Debug, Clone)]
pub enum Event {
    BatchStarted {
        run_id: Uuid,
        total: usize,
        mode: ExecMode,
    },
    EndpointStarted {
        run_id: Uuid,
        index: usize,
        endpoint: String,
    },
    EndpointFinished {
        run_id: Uuid,
        index: usize,
        endpoint: String,
        succeeded: bool,
        status_code: Option<u16>,
    },
    BatchFinished {
        run_id: Uuid,
        succeeded: usize,
        failed: usize,
    },
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event);
}

pub struct CompositeEventSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Default for CompositeEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeEventSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn add(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }
}

#[async_trait]
impl EventSink for CompositeEventSink {
    async fn emit(&self, event: Event) {
        for sink in &self.sinks {
            sink.emit(event.clone()).await;
        }
    }
}

/// One JSON object per line on stdout.
pub struct StdoutEventSink;

#[async_trait]
impl EventSink for StdoutEventSink {
    async fn emit(&self, event: Event) {
        let json = match event {
            Event::BatchStarted { run_id, total, mode } => {
                json!({ "type": "batch.started", "run_id": run_id.to_string(), "total": total, "mode": mode.as_str() })
            }
            Event::EndpointStarted { run_id, index, endpoint } => {
                json!({ "type": "endpoint.started", "run_id": run_id.to_string(), "index": index, "endpoint": endpoint })
            }
            Event::EndpointFinished { run_id, index, endpoint, succeeded, status_code } => {
                json!({ "type": "endpoint.finished", "run_id": run_id.to_string(), "index": index, "endpoint": endpoint, "succeeded": succeeded, "status_code": status_code })
            }
            Event::BatchFinished { run_id, succeeded, failed } => {
                json!({ "type": "batch.finished", "run_id": run_id.to_string(), "succeeded": succeeded, "failed": failed })
            }
        };
        println!("{}", serde_json::to_string(&json).unwrap_or_default());
    }
}

pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: Event) {}
}
