use std::path::{Path, PathBuf};

use crate::extract::{LayeredExtraction, StructuredExtractor, TextExtractor};
use crate::runner::{ProcessOutput, RobotRunner};

use super::types::{ExecutionFailure, Verdict};

pub struct ExecuteArgs<'a> {
    pub runner: &'a dyn RobotRunner,
    pub url: &'a str,
    pub report_path: &'a Path,
}

/// Runs the suite against `url` and turns whatever it produced into a verdict.
///
/// Only a runner that could not run at all yields `Err`; every other outcome,
/// including failing tests and unreadable reports, is a `Verdict`.
pub async fn execute_robot_test(args: ExecuteArgs<'_>) -> Result<Verdict, ExecutionFailure> {
    let ExecuteArgs {
        runner,
        url,
        report_path,
    } = args;

    tracing::info!(target: "robotrun.engine", runner = runner.name(), url, "starting robot run");

    let output = match runner.run(url).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(target: "robotrun.engine", error = %e, "robot run could not be executed");
            return Err(ExecutionFailure {
                output: e
                    .partial_output()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string()),
                error_message: format!("robot test execution failed: {e}"),
            });
        }
    };

    tracing::debug!(target: "robotrun.engine", exit_code = ?output.exit_code, stdout = %output.stdout, "runner finished");
    if !output.stderr.trim().is_empty() {
        tracing::warn!(target: "robotrun.engine", stderr = %output.stderr, "runner wrote to stderr");
    }

    let structured = load_structured(report_path.to_path_buf()).await;
    let verdict = compose_verdict(&output, &structured);
    log_verdict(&verdict);
    Ok(verdict)
}

/// Report first, console second; pure and repeatable for the same inputs.
pub fn compose_verdict(output: &ProcessOutput, structured: &StructuredExtractor) -> Verdict {
    let text = TextExtractor::new(&output.stdout);
    let outcome = LayeredExtraction::new(structured, &text).resolve();
    Verdict::from_outcome(outcome)
}

/// Verdict for an already finished run, e.g. artifacts copied off a CI box.
pub fn analyze_artifacts(report_path: Option<&Path>, console: &str) -> Verdict {
    let structured = match report_path {
        Some(path) => StructuredExtractor::load(path),
        None => StructuredExtractor::unavailable(),
    };
    compose_verdict(&ProcessOutput::new(console, ""), &structured)
}

async fn load_structured(path: PathBuf) -> StructuredExtractor {
    match tokio::task::spawn_blocking(move || StructuredExtractor::load(&path)).await {
        Ok(extractor) => extractor,
        Err(e) => {
            tracing::warn!(target: "robotrun.engine", error = %e, "report loader task failed");
            StructuredExtractor::unavailable()
        }
    }
}

fn log_verdict(verdict: &Verdict) {
    let outcome = verdict.outcome();
    let kind = match verdict {
        Verdict::Completed(_) => "completed",
        Verdict::PartialFailure(_) => "partial_failure",
    };
    tracing::info!(
        target: "robotrun.engine",
        verdict = kind,
        success = outcome.success,
        pass = outcome.stats.pass,
        fail = outcome.stats.fail,
        skip = outcome.stats.skip,
        correlation_id = outcome.correlation_id.as_deref().unwrap_or("-"),
        "robot run evaluated"
    );
}
