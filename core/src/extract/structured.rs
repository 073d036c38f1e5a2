use std::path::Path;

use super::traits::ResultExtractor;
use crate::engine::Stats;
use crate::report::{self, ParsedReport};

/// Results read from `output.xml`.
///
/// A report that could not be loaded behaves as an empty source so the
/// fallback takes over.
#[derive(Debug, Clone, Default)]
pub struct StructuredExtractor {
    report: Option<ParsedReport>,
}

impl StructuredExtractor {
    pub fn load(path: &Path) -> Self {
        match report::read_report(path) {
            Ok(report) => Self::from_report(report),
            Err(e) => {
                tracing::warn!(target: "robotrun.report", error = %e, "structured report unusable, falling back to console");
                Self::unavailable()
            }
        }
    }

    pub fn from_report(report: ParsedReport) -> Self {
        Self {
            report: Some(report),
        }
    }

    pub fn unavailable() -> Self {
        Self { report: None }
    }

    pub fn is_available(&self) -> bool {
        self.report.is_some()
    }
}

impl ResultExtractor for StructuredExtractor {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn counts(&self) -> Stats {
        self.report
            .as_ref()
            .map(|r| report::extract_stats(&r.totals))
            .unwrap_or_default()
    }

    fn failure_message(&self) -> Option<String> {
        self.report.as_ref().and_then(|r| report::first_failure(&r.tree))
    }

    fn correlation_id(&self) -> Option<String> {
        self.report
            .as_ref()
            .and_then(|r| report::find_correlation_id(&r.tree))
    }
}
