use serde::{Deserialize, Serialize};

/// Pass/fail/skip counts plus the first failure diagnostic, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub pass: u32,
    pub fail: u32,
    pub skip: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Stats {
    pub fn counts(pass: u32, fail: u32, skip: u32) -> Self {
        Self {
            pass,
            fail,
            skip,
            error_message: None,
        }
    }

    /// All three counts are zero: nothing usable was extracted.
    pub fn is_empty(&self) -> bool {
        self.pass == 0 && self.fail == 0 && self.skip == 0
    }

    /// The only success predicate: something passed and nothing failed.
    pub fn is_success(&self) -> bool {
        self.pass > 0 && self.fail == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    pub success: bool,
    pub stats: Stats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl RunOutcome {
    pub fn new(stats: Stats, correlation_id: Option<String>) -> Self {
        Self {
            success: stats.is_success(),
            stats,
            correlation_id,
        }
    }
}

/// How a run that produced output ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every test passed, or nothing conclusive was found (`success` tells which).
    Completed(RunOutcome),
    /// The run finished but at least one test failed.
    PartialFailure(RunOutcome),
}

impl Verdict {
    pub fn from_outcome(outcome: RunOutcome) -> Self {
        if !outcome.success && outcome.stats.fail > 0 {
            Verdict::PartialFailure(outcome)
        } else {
            Verdict::Completed(outcome)
        }
    }

    pub fn outcome(&self) -> &RunOutcome {
        match self {
            Verdict::Completed(o) | Verdict::PartialFailure(o) => o,
        }
    }

    pub fn into_outcome(self) -> RunOutcome {
        match self {
            Verdict::Completed(o) | Verdict::PartialFailure(o) => o,
        }
    }
}

/// The runner could not be executed at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error_message}")]
pub struct ExecutionFailure {
    /// Last known console output, or the failure reason when nothing was captured.
    pub output: String,
    pub error_message: String,
}
