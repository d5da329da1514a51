use std::sync::Arc;

use uuid::Uuid;
use volley_exec::executor::{
    Event, EventSink, ExecMode, MetricsCollector, MetricsEventSink, NoOpEventSink,
};

#[tokio::test]
async fn counters_follow_the_event_stream() {
    let collector = Arc::new(MetricsCollector::new());
    let sink = MetricsEventSink::new(collector.clone(), Arc::new(NoOpEventSink));
    let run_id = Uuid::new_v4();

    sink.emit(Event::BatchStarted {
        run_id,
        total: 3,
        mode: ExecMode::Parallel,
    })
    .await;
    for (index, succeeded) in [(0, true), (1, false), (2, true)] {
        sink.emit(Event::EndpointStarted {
            run_id,
            index,
            endpoint: format!("http://host.test/{index}"),
        })
        .await;
        sink.emit(Event::EndpointFinished {
            run_id,
            index,
            endpoint: format!("http://host.test/{index}"),
            succeeded,
            status_code: succeeded.then_some(200),
        })
        .await;
    }
    sink.emit(Event::BatchFinished {
        run_id,
        succeeded: 2,
        failed: 1,
    })
    .await;

    let metrics = collector.get_metrics().await;
    assert_eq!(metrics.http_requests, 3);
    assert_eq!(metrics.endpoints_succeeded, 2);
    assert_eq!(metrics.endpoints_failed, 1);
    assert_eq!(metrics.endpoints_total, 3);
    assert_eq!(metrics.run_id, run_id.to_string());
    assert!(metrics.total_duration.is_some());
}

#[tokio::test]
async fn metrics_render_as_json() {
    let collector = Arc::new(MetricsCollector::new());
    let sink = MetricsEventSink::new(collector.clone(), Arc::new(NoOpEventSink));
    let run_id = Uuid::new_v4();

    sink.emit(Event::BatchFinished {
        run_id,
        succeeded: 1,
        failed: 0,
    })
    .await;

    let json = collector.get_metrics().await.to_json();
    assert_eq!(json["endpoints"]["total"], 1);
    assert_eq!(json["endpoints"]["succeeded"], 1);
    assert!(json["duration_ms"].is_number());
}
