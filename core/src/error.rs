use std::path::PathBuf;

use thiserror::Error;

/// Failures of the structured report reader.
///
/// Both variants are recovered by the composer through the console fallback;
/// they never reach a caller of the engine.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report unavailable: {path}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("report malformed: {path} ({reason})")]
    Malformed { path: PathBuf, reason: String },
}

impl ReportError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to start runner process: {0}")]
    Spawn(String),

    #[error("runner timed out after {secs}s")]
    Timeout { secs: u64, output: String },

    #[error("runner io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RunnerError {
    /// Output captured before the failure, if the runner got that far.
    pub fn partial_output(&self) -> Option<&str> {
        match self {
            RunnerError::Timeout { output, .. } if !output.is_empty() => Some(output),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("config parse error")]
    Parse(#[source] anyhow::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("env var invalid: {key}")]
    EnvInvalid {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error("{0}")]
    Command(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
