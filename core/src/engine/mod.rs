mod run;
mod types;

pub use run::{analyze_artifacts, compose_verdict, execute_robot_test, ExecuteArgs};
pub use types::{ExecutionFailure, RunOutcome, Stats, Verdict};
