pub const DEFAULT_MAX_WORKERS: usize = 10;

/// Per-run execution policy: parallel fan-out vs in-order execution, and the
/// worker bound applied in parallel mode.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExecutionPolicy {
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_workers: Option<usize>,
}

fn default_parallel() -> bool {
    true
}

impl Default for ExecutionPolicy {
    fn default() -> Self {
        Self {
            parallel: true,
            max_workers: None,
        }
    }
}

impl ExecutionPolicy {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            max_workers: None,
        }
    }

    /// A batch of exactly one descriptor always runs sequentially; an empty
    /// batch keeps the requested mode (degenerate but valid).
    pub fn is_sequential_for(&self, endpoint_count: usize) -> bool {
        !self.parallel || endpoint_count == 1
    }

    /// Worker bound for a batch of `endpoint_count` descriptors: the requested
    /// bound (default `min(10, n)`), clamped to `1..=n` so no worker idles.
    pub fn effective_workers(&self, endpoint_count: usize) -> usize {
        let requested = self
            .max_workers
            .unwrap_or_else(|| DEFAULT_MAX_WORKERS.min(endpoint_count.max(1)));
        requested.clamp(1, endpoint_count.max(1))
    }
}
