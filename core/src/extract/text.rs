use super::traits::ResultExtractor;
use crate::console;
use crate::engine::Stats;

/// Results scraped from console output.
#[derive(Debug, Clone, Copy)]
pub struct TextExtractor<'a> {
    console: &'a str,
}

impl<'a> TextExtractor<'a> {
    pub fn new(console: &'a str) -> Self {
        Self { console }
    }
}

impl ResultExtractor for TextExtractor<'_> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn counts(&self) -> Stats {
        console::parse_counts(self.console)
    }

    fn failure_message(&self) -> Option<String> {
        console::failure_message(self.console)
    }

    fn correlation_id(&self) -> Option<String> {
        console::correlation_id(self.console)
    }
}
