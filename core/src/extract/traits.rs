use crate::engine::Stats;

/// One source of run results.
///
/// Implementations never fail: a source that has nothing to offer returns
/// empty counts and `None` for the rest.
pub trait ResultExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Pass/fail/skip counts, without an error message.
    fn counts(&self) -> Stats;

    fn failure_message(&self) -> Option<String>;

    fn correlation_id(&self) -> Option<String>;
}
