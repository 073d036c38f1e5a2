//! Correlation id search over keyword log messages.
//!
//! Several messages may carry a UUID-shaped token; each one is ranked by how
//! explicitly it announces the id and the best-ranked one wins.

use super::tree::{NodeId, ReportTree, ReportVisitor};
use crate::patterns::{self, EXTRACTED_UUID_MARKER, UUID_ASSIGNMENT};

pub const TIER_EXTRACTED: i32 = 100;
pub const TIER_GET_TEXT_ASSIGNMENT: i32 = 90;
pub const TIER_MENTIONS_UUID: i32 = 50;
pub const TIER_BARE_UUID: i32 = 10;

const GET_TEXT_KEYWORD: &str = "Get Text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    pub text: String,
    pub priority: i32,
}

/// Tier of a message logged by `keyword_name`, or `None` when it does not qualify.
pub fn classify(keyword_name: Option<&str>, text: &str) -> Option<i32> {
    if patterns::is_noise(text) {
        return None;
    }
    if text.contains(EXTRACTED_UUID_MARKER) {
        Some(TIER_EXTRACTED)
    } else if keyword_name == Some(GET_TEXT_KEYWORD) && UUID_ASSIGNMENT.is_match(text) {
        Some(TIER_GET_TEXT_ASSIGNMENT)
    } else if patterns::mentions_uuid(text) {
        Some(TIER_MENTIONS_UUID)
    } else if patterns::UUID.is_match(text) {
        Some(TIER_BARE_UUID)
    } else {
        None
    }
}

#[derive(Default)]
struct CandidateCollector {
    candidates: Vec<CandidateMatch>,
}

impl ReportVisitor for CandidateCollector {
    fn visit_keyword(&mut self, tree: &ReportTree, keyword: NodeId) {
        let name = tree.keyword_name(keyword);
        for text in tree.messages(keyword) {
            if let Some(priority) = classify(name, text) {
                self.candidates.push(CandidateMatch {
                    text: text.to_string(),
                    priority,
                });
            }
        }
    }
}

/// Every qualifying message, best tier first; discovery order within a tier.
pub fn collect_candidates(tree: &ReportTree) -> Vec<CandidateMatch> {
    let mut collector = CandidateCollector::default();
    tree.walk(&mut collector);
    let mut candidates = collector.candidates;
    // sort_by is stable
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
    candidates
}

pub fn pick_correlation_id(candidates: &[CandidateMatch]) -> Option<String> {
    candidates
        .iter()
        .find_map(|c| patterns::find_uuid(&c.text))
        .map(str::to_string)
}

pub fn find_correlation_id(tree: &ReportTree) -> Option<String> {
    let candidates = collect_candidates(tree);
    if !candidates.is_empty() {
        tracing::debug!(
            target: "robotrun.report",
            candidates = candidates.len(),
            top_priority = candidates[0].priority,
            "correlation id candidates"
        );
    }
    pick_correlation_id(&candidates)
}
