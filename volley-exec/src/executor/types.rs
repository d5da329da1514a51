use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Hard ceiling applied on top of each descriptor's own timeout.
    pub timeout_cap: Duration,
    /// Response bodies above this size fail the call instead of buffering
    /// without bound.
    pub max_response_bytes: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            timeout_cap: Duration::from_secs(volley_core::types::MAX_TIMEOUT_SECS),
            max_response_bytes: 4 * 1024 * 1024,
        }
    }
}
