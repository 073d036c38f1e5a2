use std::num::IntErrorKind;

use super::reader::StatEntry;
use crate::engine::Stats;

/// Counts of the first "All Tests" entry; zero when absent.
pub fn extract_stats(totals: &[StatEntry]) -> Stats {
    let Some(entry) = totals.iter().find(|e| e.is_all_tests()) else {
        return Stats::default();
    };
    Stats::counts(
        parse_count(entry.pass.as_deref()),
        parse_count(entry.fail.as_deref()),
        parse_count(entry.skip.as_deref()),
    )
}

/// Unparsable or absent is 0; a count past `u32::MAX` saturates.
fn parse_count(raw: Option<&str>) -> u32 {
    match raw.map(|s| s.trim().parse::<u32>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
        _ => 0,
    }
}
