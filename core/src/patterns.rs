//! Text patterns shared by the structured and console extractors.

use lazy_static::lazy_static;
use regex::Regex;

pub const EXTRACTED_UUID_MARKER: &str = "Extracted UUID:";
pub const UUID_VARIABLE_MARKER: &str = "${uuid} =";
pub const PASS_MARKER: &str = "| PASS |";
pub const FAIL_MARKER: &str = "| FAIL |";

/// Substrings that mark locator/auth noise; such text never yields a correlation id.
const NOISE_MARKERS: [&str; 2] = ["xpath", "token="];

lazy_static! {
    pub static ref UUID: Regex =
        Regex::new(r"(?i)[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}").unwrap();
    pub static ref UUID_ASSIGNMENT: Regex = Regex::new(
        r"(?i)\$\{uuid\} = [a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}"
    )
    .unwrap();
    pub static ref JSON_VALUE_UUID: Regex = Regex::new(
        r#"(?i)"value":"[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}""#
    )
    .unwrap();
    pub static ref SUMMARY: Regex =
        Regex::new(r"(\d+) tests?, (\d+) passed, (\d+) failed").unwrap();
    pub static ref LOCATOR_NOT_FOUND: Regex =
        Regex::new(r"Element with locator .* not found").unwrap();
}

pub fn find_uuid(text: &str) -> Option<&str> {
    UUID.find(text).map(|m| m.as_str())
}

pub fn mentions_uuid(text: &str) -> bool {
    text.contains("UUID") || text.contains("uuid")
}

pub fn is_noise(text: &str) -> bool {
    NOISE_MARKERS.iter().any(|m| text.contains(m))
}
