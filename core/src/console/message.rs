use crate::patterns::{FAIL_MARKER, LOCATOR_NOT_FOUND};

const RULE_LEN: usize = 10;

/// First failure diagnostic in console text.
///
/// Prefers the block printed under a `| FAIL |` marker, which runs until the
/// next `-----`/`=====` rule line or end of text; falls back to a
/// locator-not-found message anywhere in the text.
pub fn failure_message(console: &str) -> Option<String> {
    fail_block(console).or_else(|| {
        LOCATOR_NOT_FOUND
            .find(console)
            .map(|m| m.as_str().to_string())
    })
}

fn fail_block(console: &str) -> Option<String> {
    for (idx, _) in console.match_indices(FAIL_MARKER) {
        let rest = &console[idx + FAIL_MARKER.len()..];
        let ws_len = rest.len() - rest.trim_start().len();
        // the marker must end its line
        let Some(nl) = rest[..ws_len].rfind('\n') else {
            continue;
        };
        let body = &rest[nl + 1..];
        let end = rule_start(body).unwrap_or(body.len());
        let message = body[..end].trim();
        if !message.is_empty() {
            return Some(message.to_string());
        }
    }
    None
}

/// Byte offset of the newline that precedes the first rule line.
fn rule_start(body: &str) -> Option<usize> {
    body.match_indices('\n')
        .map(|(i, _)| i)
        .find(|&i| is_rule(&body[i + 1..], '-') || is_rule(&body[i + 1..], '='))
}

fn is_rule(line: &str, ch: char) -> bool {
    line.chars().take(RULE_LEN).filter(|&c| c == ch).count() == RULE_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_under_fail_marker_until_dash_rule() {
        let console = "\
==============================================================================
Tests.Login
==============================================================================
Submit Form                                                           | FAIL |
Element with locator 'id=submit' not found
------------------------------------------------------------------------------
Tests.Login                                                           | FAIL |
1 test, 0 passed, 1 failed
==============================================================================
";
        assert_eq!(
            failure_message(console).as_deref(),
            Some("Element with locator 'id=submit' not found")
        );
    }

    #[test]
    fn multi_line_block_stops_at_equals_rule() {
        let console = "Case | FAIL |\n  first line\n  second line\n==========\nrest";
        assert_eq!(
            failure_message(console).as_deref(),
            Some("first line\n  second line")
        );
    }

    #[test]
    fn block_runs_to_end_of_text() {
        let console = "Case | FAIL |\nTimeout after 5s  ";
        assert_eq!(failure_message(console).as_deref(), Some("Timeout after 5s"));
    }

    #[test]
    fn short_dash_runs_are_not_rules() {
        let console = "Case | FAIL |\nexpected --- got\n---------\nmore\n----------\n";
        assert_eq!(
            failure_message(console).as_deref(),
            Some("expected --- got\n---------\nmore")
        );
    }

    #[test]
    fn marker_mid_line_is_skipped() {
        let console = "Case | FAIL | inline text\nElement with locator 'css=.buy' not found in page";
        assert_eq!(
            failure_message(console).as_deref(),
            Some("Element with locator 'css=.buy' not found")
        );
    }

    #[test]
    fn nothing_found() {
        assert_eq!(failure_message("all good | PASS |\n"), None);
    }
}
