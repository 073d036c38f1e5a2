use std::path::PathBuf;

use async_trait::async_trait;

use robotrun_core::api::{ProcessOutput, RobotRunner, RunnerError};

/// Serves console output recorded from an earlier run.
///
/// Useful for exercising the extraction pipeline without a container.
pub struct ReplayRobotRunner {
    stdout_file: PathBuf,
    stderr_file: Option<PathBuf>,
}

impl ReplayRobotRunner {
    pub fn new(stdout_file: PathBuf, stderr_file: Option<PathBuf>) -> Self {
        Self {
            stdout_file,
            stderr_file,
        }
    }
}

#[async_trait]
impl RobotRunner for ReplayRobotRunner {
    fn name(&self) -> &str {
        "replay"
    }

    async fn run(&self, url: &str) -> Result<ProcessOutput, RunnerError> {
        tracing::info!(target: "robotrun.runner", file = %self.stdout_file.display(), url, "replaying recorded run");
        let stdout = tokio::fs::read_to_string(&self.stdout_file)
            .await
            .map_err(|e| RunnerError::Spawn(format!("{}: {e}", self.stdout_file.display())))?;
        let stderr = match &self.stderr_file {
            Some(path) => tokio::fs::read_to_string(path).await?,
            None => String::new(),
        };
        Ok(ProcessOutput::new(stdout, stderr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_recorded_streams() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("stdout.txt");
        let err = dir.path().join("stderr.txt");
        std::fs::write(&out, "1 test, 1 passed, 0 failed\n").unwrap();
        std::fs::write(&err, "warning\n").unwrap();

        let runner = ReplayRobotRunner::new(out, Some(err));
        let output = runner.run("http://ignored").await.unwrap();
        assert_eq!(output.stdout, "1 test, 1 passed, 0 failed\n");
        assert_eq!(output.stderr, "warning\n");
        assert_eq!(output.exit_code, None);
    }

    #[tokio::test]
    async fn missing_recording_cannot_start() {
        let runner = ReplayRobotRunner::new(PathBuf::from("/nonexistent/stdout.txt"), None);
        let err = runner.run("http://ignored").await.unwrap_err();
        assert!(matches!(err, RunnerError::Spawn(_)));
    }
}
