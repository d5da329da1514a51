pub mod concurrency;
mod dispatcher;
pub mod events;
pub mod http;
pub mod metrics;
mod outcome;
mod report;
mod request;
pub mod response;
mod types;

pub use concurrency::{WorkerLimit, WorkerPermit};
pub use dispatcher::{invoke_endpoint, Dispatcher};
pub use events::{CompositeEventSink, Event, EventSink, NoOpEventSink, StdoutEventSink};
pub use http::{HttpClient, HttpError, HttpResponseParts, ReqwestHttpClient};
pub use metrics::{BatchMetrics, MetricsCollector, MetricsEventSink};
pub use outcome::Outcome;
pub use report::{BatchReport, ExecMode};
pub use request::{build_request, BuildError, HttpRequestParts};
pub use types::DispatcherConfig;
