use crate::executor::outcome::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecMode {
    Parallel,
    Sequential,
}

impl ExecMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecMode::Parallel => "parallel",
            ExecMode::Sequential => "sequential",
        }
    }
}

/// Aggregate result of one batch execution.
///
/// `results` and `errors` partition the input index set exactly: every input
/// position appears in one of the two sequences, both kept in input order.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchReport {
    pub run_id: String,
    pub success: bool,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub execution_mode: ExecMode,
    pub results: Vec<Outcome>,
    pub errors: Vec<Outcome>,
    pub timestamp: String,
    /// Batch-level setup failure. Mutually exclusive with per-endpoint
    /// outcomes: when set, `total` is zero and both sequences are empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchReport {
    /// Assemble the report from outcomes already ordered by input index.
    pub fn from_outcomes(run_id: uuid::Uuid, mode: ExecMode, outcomes: Vec<Outcome>) -> Self {
        let total = outcomes.len();
        let (results, errors): (Vec<Outcome>, Vec<Outcome>) =
            outcomes.into_iter().partition(Outcome::is_success);

        Self {
            run_id: run_id.to_string(),
            success: errors.is_empty(),
            total,
            successful: results.len(),
            failed: errors.len(),
            execution_mode: mode,
            results,
            errors,
            timestamp: chrono::Local::now().to_rfc3339(),
            error: None,
        }
    }

    /// Zero-result report for a batch-level setup failure (descriptor source
    /// failed entirely). Distinguishable from "every endpoint failed" by the
    /// top-level error and `total == 0`.
    pub fn setup_failure(mode: ExecMode, message: impl Into<String>) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            success: false,
            total: 0,
            successful: 0,
            failed: 0,
            execution_mode: mode,
            results: Vec::new(),
            errors: Vec::new(),
            timestamp: chrono::Local::now().to_rfc3339(),
            error: Some(message.into()),
        }
    }
}
