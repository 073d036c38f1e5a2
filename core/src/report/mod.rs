//! Structured report (`output.xml`) reading and extraction.

pub mod correlation;
mod failure;
mod reader;
mod stats;
pub mod tree;

pub use correlation::{find_correlation_id, CandidateMatch};
pub use failure::first_failure;
pub use reader::{parse_report, read_report, ParsedReport, StatEntry, ALL_TESTS};
pub use stats::extract_stats;
pub use tree::{NodeId, NodeKind, ReportTree, ReportVisitor, StatusState};
