use crate::engine::Stats;
use crate::patterns::{FAIL_MARKER, PASS_MARKER, SUMMARY};

/// Counts from the first `N tests, N passed, N failed` summary, else from
/// `| PASS |` / `| FAIL |` markers, else zero.
pub fn parse_counts(console: &str) -> Stats {
    if let Some(caps) = SUMMARY.captures(console) {
        let total = number(&caps[1]);
        let pass = number(&caps[2]);
        let fail = number(&caps[3]);
        let skip = total.saturating_sub(pass.saturating_add(fail));
        return Stats::counts(pass, fail, skip);
    }

    let pass = console.matches(PASS_MARKER).count();
    let fail = console.matches(FAIL_MARKER).count();
    Stats::counts(saturate(pass), saturate(fail), 0)
}

/// Summary captures are all digits, so the only failure is overflow.
fn number(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
