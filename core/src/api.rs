//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `robotrun_core::api` instead of reaching into internal modules.

pub use crate::config::{
    AppConfig, DockerRunnerConfig, HttpServerConfig, LoggingConfig, ReplayRunnerConfig,
    RobotConfig, RobotPaths, RunnerConfig,
};
pub use crate::engine::{
    analyze_artifacts, compose_verdict, execute_robot_test, ExecuteArgs, ExecutionFailure,
    RunOutcome, Stats, Verdict,
};
pub use crate::error::{CliError, ConfigError, ReportError, RunnerError};
pub use crate::extract::{LayeredExtraction, ResultExtractor, StructuredExtractor, TextExtractor};
pub use crate::runner::{ProcessOutput, RobotRunner};
