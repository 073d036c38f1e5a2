use async_trait::async_trait;

use super::types::ProcessOutput;
use crate::error::RunnerError;

/// Launches one robot run against `url` and waits for it to finish.
///
/// A run whose tests fail, or whose process exits non-zero, is still `Ok`:
/// only a run that could not be carried out at all is an error.
#[async_trait]
pub trait RobotRunner: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, url: &str) -> Result<ProcessOutput, RunnerError>;
}
