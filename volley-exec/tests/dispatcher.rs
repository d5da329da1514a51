use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use volley_core::types::{Endpoint, ExecutionPolicy};
use volley_exec::executor::{
    Dispatcher, DispatcherConfig, ExecMode, HttpClient, HttpError, HttpRequestParts,
    HttpResponseParts, NoOpEventSink,
};

#[derive(Clone)]
enum Reply {
    Status(u16, &'static str),
    Refuse,
}

/// Scripted HTTP client: replies per URL with an optional artificial delay,
/// and tracks the peak number of concurrent in-flight calls.
struct MockHttpClient {
    replies: HashMap<String, (Reply, u64)>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl MockHttpClient {
    fn new() -> Self {
        Self {
            replies: HashMap::new(),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    fn reply(mut self, url: &str, reply: Reply, delay_ms: u64) -> Self {
        self.replies.insert(url.to_string(), (reply, delay_ms));
        self
    }

    fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(
        &self,
        req: HttpRequestParts,
        _timeout: Duration,
        _max_response_bytes: usize,
    ) -> Result<HttpResponseParts, HttpError> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(current, Ordering::SeqCst);

        let (reply, delay_ms) = self
            .replies
            .get(req.url.as_str())
            .cloned()
            .unwrap_or((Reply::Status(200, "{}"), 0));
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match reply {
            Reply::Status(status, body) => Ok(HttpResponseParts {
                status,
                body: body.as_bytes().to_vec(),
            }),
            Reply::Refuse => Err(HttpError::Network("connection refused".to_string())),
        }
    }
}

fn dispatcher(http: Arc<MockHttpClient>) -> Dispatcher {
    Dispatcher::new(DispatcherConfig::default(), http, Arc::new(NoOpEventSink))
}

fn parallel(max_workers: usize) -> ExecutionPolicy {
    ExecutionPolicy {
        parallel: true,
        max_workers: Some(max_workers),
    }
}

#[tokio::test]
async fn order_is_preserved_under_randomized_delays() {
    // Later endpoints complete first: delays decrease along the input order.
    let urls: Vec<String> = (0..8).map(|i| format!("http://host.test/ep{i}")).collect();
    let mut http = MockHttpClient::new();
    for (i, url) in urls.iter().enumerate() {
        let delay = [70, 10, 55, 5, 40, 25, 60, 1][i];
        http = http.reply(url, Reply::Status(200, "{}"), delay);
    }

    let endpoints: Vec<Endpoint> = urls.iter().map(Endpoint::new).collect();
    let report = dispatcher(Arc::new(http))
        .execute_batch(&endpoints, &parallel(8), None)
        .await;

    assert_eq!(report.execution_mode, ExecMode::Parallel);
    assert_eq!(report.total, 8);
    let reported: Vec<&str> = report.results.iter().map(|o| o.endpoint.as_str()).collect();
    let expected: Vec<&str> = urls.iter().map(String::as_str).collect();
    assert_eq!(reported, expected);
    let indices: Vec<usize> = report.results.iter().map(|o| o.index).collect();
    assert_eq!(indices, (0..8).collect::<Vec<_>>());
}

#[tokio::test]
async fn results_and_errors_partition_the_index_set() {
    let http = MockHttpClient::new()
        .reply("http://host.test/a", Reply::Status(200, "{}"), 20)
        .reply("http://host.test/b", Reply::Refuse, 5)
        .reply("http://host.test/c", Reply::Status(500, "{}"), 1)
        .reply("http://host.test/d", Reply::Refuse, 30);

    let endpoints: Vec<Endpoint> = ["a", "b", "c", "d"]
        .iter()
        .map(|p| Endpoint::new(format!("http://host.test/{p}")))
        .collect();
    let report = dispatcher(Arc::new(http))
        .execute_batch(&endpoints, &parallel(4), None)
        .await;

    assert_eq!(report.successful + report.failed, report.total);
    let mut indices: Vec<usize> = report
        .results
        .iter()
        .chain(report.errors.iter())
        .map(|o| o.index)
        .collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn one_failure_does_not_disturb_other_outcomes() {
    let http = MockHttpClient::new()
        .reply("http://host.test/ok1", Reply::Status(200, r#"{"n":1}"#), 0)
        .reply("http://host.test/boom", Reply::Refuse, 0)
        .reply("http://host.test/ok2", Reply::Status(201, r#"{"n":2}"#), 0);

    let endpoints = vec![
        Endpoint::new("http://host.test/ok1"),
        Endpoint::new("http://host.test/boom"),
        Endpoint::new("http://host.test/ok2"),
    ];
    let report = dispatcher(Arc::new(http))
        .execute_batch(&endpoints, &parallel(3), None)
        .await;

    assert_eq!(report.successful, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.results[0].status_code, Some(200));
    assert_eq!(report.results[1].status_code, Some(201));
    assert_eq!(report.errors[0].index, 1);
    assert!(report.errors[0]
        .error
        .as_deref()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn single_endpoint_runs_sequentially_even_when_parallel_requested() {
    let http = MockHttpClient::new();
    let endpoints = vec![Endpoint::new("http://host.test/only")];
    let report = dispatcher(Arc::new(http))
        .execute_batch(&endpoints, &parallel(10), None)
        .await;

    assert_eq!(report.execution_mode, ExecMode::Sequential);
    assert_eq!(report.total, 1);
    assert_eq!(report.successful, 1);
}

#[tokio::test]
async fn worker_bound_caps_concurrent_invocations() {
    let urls: Vec<String> = (0..6).map(|i| format!("http://host.test/w{i}")).collect();
    let mut http = MockHttpClient::new();
    for url in &urls {
        http = http.reply(url, Reply::Status(200, "{}"), 40);
    }
    let http = Arc::new(http);

    let endpoints: Vec<Endpoint> = urls.iter().map(Endpoint::new).collect();
    let report = dispatcher(http.clone())
        .execute_batch(&endpoints, &parallel(2), None)
        .await;

    assert_eq!(report.successful, 6);
    assert!(
        http.peak_concurrency() <= 2,
        "peak concurrency {} exceeded the worker bound",
        http.peak_concurrency()
    );
}

#[tokio::test]
async fn oversized_worker_bound_never_exceeds_endpoint_count() {
    let urls: Vec<String> = (0..3).map(|i| format!("http://host.test/n{i}")).collect();
    let mut http = MockHttpClient::new();
    for url in &urls {
        http = http.reply(url, Reply::Status(200, "{}"), 20);
    }
    let http = Arc::new(http);

    let endpoints: Vec<Endpoint> = urls.iter().map(Endpoint::new).collect();
    dispatcher(http.clone())
        .execute_batch(&endpoints, &parallel(100), None)
        .await;

    assert!(http.peak_concurrency() <= 3);
}

#[tokio::test]
async fn mixed_scenario_matches_expected_summary() {
    // a → 200, b → connection refused, c → 404; parallel with two workers.
    let http = MockHttpClient::new()
        .reply("http://a.test/ok", Reply::Status(200, r#"{"ok":true}"#), 0)
        .reply("http://b.test/fail", Reply::Refuse, 0)
        .reply("http://c.test/ok", Reply::Status(404, "not found"), 0);

    let endpoints = vec![
        Endpoint::new("http://a.test/ok"),
        Endpoint::new("http://b.test/fail"),
        Endpoint::new("http://c.test/ok"),
    ];
    let report = dispatcher(Arc::new(http))
        .execute_batch(&endpoints, &parallel(2), None)
        .await;

    assert_eq!(report.total, 3);
    assert_eq!(report.successful, 2);
    assert_eq!(report.failed, 1);
    assert!(!report.success);

    // The 404 is still a success at this layer, ordered after a.
    assert_eq!(report.results[0].endpoint, "http://a.test/ok");
    assert_eq!(report.results[0].status_code, Some(200));
    assert_eq!(report.results[1].endpoint, "http://c.test/ok");
    assert_eq!(report.results[1].status_code, Some(404));
    assert_eq!(report.errors[0].endpoint, "http://b.test/fail");
}

#[tokio::test]
async fn empty_batch_yields_zero_report() {
    let report = dispatcher(Arc::new(MockHttpClient::new()))
        .execute_batch(&[], &ExecutionPolicy::default(), None)
        .await;

    assert_eq!(report.total, 0);
    assert_eq!(report.successful, 0);
    assert_eq!(report.failed, 0);
    assert!(report.results.is_empty());
    assert!(report.errors.is_empty());
    assert!(report.success);
    assert_eq!(report.execution_mode, ExecMode::Parallel);

    let report = dispatcher(Arc::new(MockHttpClient::new()))
        .execute_batch(&[], &ExecutionPolicy::sequential(), None)
        .await;
    assert_eq!(report.execution_mode, ExecMode::Sequential);
}

#[tokio::test]
async fn sequential_mode_walks_input_order() {
    let http = MockHttpClient::new()
        .reply("http://host.test/s0", Reply::Status(200, "{}"), 30)
        .reply("http://host.test/s1", Reply::Refuse, 0)
        .reply("http://host.test/s2", Reply::Status(200, "{}"), 0);
    let http = Arc::new(http);

    let endpoints = vec![
        Endpoint::new("http://host.test/s0"),
        Endpoint::new("http://host.test/s1"),
        Endpoint::new("http://host.test/s2"),
    ];
    let report = dispatcher(http.clone())
        .execute_batch(&endpoints, &ExecutionPolicy::sequential(), None)
        .await;

    assert_eq!(report.execution_mode, ExecMode::Sequential);
    assert_eq!(http.peak_concurrency(), 1);
    assert_eq!(report.successful, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.results[0].index, 0);
    assert_eq!(report.results[1].index, 2);
}
