use super::traits::ResultExtractor;
use crate::engine::RunOutcome;

/// Primary source with a field-by-field fallback.
///
/// Counts come from the fallback only when the primary counts are all zero.
/// The error message and correlation id are filled from the fallback whenever
/// the primary could not supply them.
pub struct LayeredExtraction<'a> {
    primary: &'a dyn ResultExtractor,
    fallback: &'a dyn ResultExtractor,
}

impl<'a> LayeredExtraction<'a> {
    pub fn new(primary: &'a dyn ResultExtractor, fallback: &'a dyn ResultExtractor) -> Self {
        Self { primary, fallback }
    }

    pub fn resolve(&self) -> RunOutcome {
        let mut stats = self.primary.counts();
        if stats.fail > 0 {
            stats.error_message = self.primary.failure_message();
        }

        if stats.is_empty() {
            let fallback = self.fallback.counts();
            if !fallback.is_empty() {
                tracing::debug!(
                    target: "robotrun.extract",
                    source = self.fallback.name(),
                    pass = fallback.pass,
                    fail = fallback.fail,
                    skip = fallback.skip,
                    "counts taken from fallback"
                );
                stats = fallback;
            }
        }

        if !stats.is_success() && stats.error_message.is_none() {
            stats.error_message = self.fallback.failure_message();
        }

        let correlation_id = self
            .primary
            .correlation_id()
            .or_else(|| self.fallback.correlation_id());

        RunOutcome::new(stats, correlation_id)
    }
}
