use crate::patterns::{self, EXTRACTED_UUID_MARKER, JSON_VALUE_UUID, UUID_VARIABLE_MARKER};

type LineFilter = fn(&str) -> bool;

/// Line selectors in precedence order. Only the first line each one selects
/// is inspected; a tier whose line holds no UUID yields to the next tier.
/// Lines carrying `token=` or `xpath` are invisible to every tier.
const TIERS: [(&str, LineFilter); 5] = [
    ("extracted-marker", |l| l.contains(EXTRACTED_UUID_MARKER)),
    ("json-value", |l| JSON_VALUE_UUID.is_match(l)),
    ("uuid-variable", |l| l.contains(UUID_VARIABLE_MARKER)),
    ("mentions-uuid", patterns::mentions_uuid),
    ("any-uuid", |l| patterns::UUID.is_match(l)),
];

pub fn correlation_id(console: &str) -> Option<String> {
    for (tier, selects) in TIERS {
        let Some(line) = console
            .lines()
            .find(|l| !patterns::is_noise(l) && selects(l))
        else {
            continue;
        };
        if let Some(id) = patterns::find_uuid(line) {
            tracing::debug!(target: "robotrun.console", tier, "correlation id from console");
            return Some(id.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
    const B: &str = "9b2d7c1e-0a4f-4e8b-8d6a-1c2b3d4e5f60";

    #[test]
    fn extracted_marker_has_top_precedence() {
        let console = format!("bare {B}\n{{\"value\":\"{B}\"}}\nINFO Extracted UUID: {A}\n");
        assert_eq!(correlation_id(&console).as_deref(), Some(A));
    }

    #[test]
    fn json_value_fragment_beats_variable_assignment() {
        let console = format!("${{uuid}} = {B}\nresponse {{\"value\":\"{A}\"}}\n");
        assert_eq!(correlation_id(&console).as_deref(), Some(A));
    }

    #[test]
    fn variable_assignment_beats_uuid_mention() {
        let console = format!("uuid is {B}\n${{uuid}} = {A}\n");
        assert_eq!(correlation_id(&console).as_deref(), Some(A));
    }

    #[test]
    fn marker_line_without_uuid_skips_to_next_tier() {
        let console = format!("Extracted UUID: <none>\nsaved {A}\n");
        assert_eq!(correlation_id(&console).as_deref(), Some(A));
    }

    #[test]
    fn only_first_line_of_a_tier_is_inspected() {
        // The first mention has no id; the second mention is never consulted,
        // so the bare-uuid tier picks the earliest line with an id.
        let console = format!("{B} created\nUUID pending\nUUID {A}\n");
        assert_eq!(correlation_id(&console).as_deref(), Some(B));
    }

    #[test]
    fn noise_lines_are_never_used() {
        let console = format!("GET /login?token={A}\nClick xpath=//div[@id='{B}']\n");
        assert_eq!(correlation_id(&console), None);

        let console = format!("Extracted UUID: {A} token=x\nsaved {B}\n");
        assert_eq!(correlation_id(&console).as_deref(), Some(B));
    }

    #[test]
    fn empty_console_has_no_id() {
        assert_eq!(correlation_id(""), None);
    }
}
