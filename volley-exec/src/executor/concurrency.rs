use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Bounded worker pool: at most `workers` invocations hold a permit at once.
pub struct WorkerLimit {
    permits: Arc<Semaphore>,
}

impl WorkerLimit {
    pub fn new(workers: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    pub async fn acquire(&self) -> WorkerPermit {
        // Acquire only fails when the semaphore is closed, which never
        // happens here; the semaphore lives as long as the batch.
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .unwrap_or_else(|_| {
                panic!("worker semaphore closed unexpectedly. This is a bug - please report it.");
            });
        WorkerPermit { _permit: permit }
    }
}

pub struct WorkerPermit {
    _permit: OwnedSemaphorePermit,
}
