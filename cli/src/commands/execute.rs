use serde_json::Value;

use robotrun_core::api::{execute_robot_test, AppConfig, CliError, ExecuteArgs as RunArgs, Verdict};

use crate::commands::cli::ExecuteArgs;
use crate::http::models::failure_body;
use crate::http::validation::validate_url;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PARTIAL_FAILURE: i32 = 1;
pub const EXIT_HARD_FAILURE: i32 = 2;

/// Runs once and returns the process exit code.
pub async fn handle_execute(args: ExecuteArgs, cfg: &AppConfig) -> Result<i32, CliError> {
    let url = validate_url(&args.url).map_err(CliError::Command)?;
    let runner = robotrun_plugins::factory::build_runner(cfg).map_err(|e| CliError::Command(e.to_string()))?;
    let report_path = cfg.robot.paths().report;

    let result = execute_robot_test(RunArgs {
        runner: runner.as_ref(),
        url,
        report_path: &report_path,
    })
    .await;

    let (body, code) = match result {
        Ok(verdict) => {
            let code = exit_code(&verdict);
            (serde_json::to_value(verdict.outcome()), code)
        }
        Err(failure) => (Ok(failure_body(&failure)), EXIT_HARD_FAILURE),
    };
    print_json(body.map_err(|e| CliError::Command(e.to_string()))?)?;
    Ok(code)
}

pub fn exit_code(verdict: &Verdict) -> i32 {
    match verdict {
        Verdict::Completed(outcome) if outcome.success => EXIT_SUCCESS,
        Verdict::Completed(_) | Verdict::PartialFailure(_) => EXIT_PARTIAL_FAILURE,
    }
}

pub(crate) fn print_json(value: Value) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(&value).map_err(|e| CliError::Command(e.to_string()))?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use robotrun_core::api::{RunOutcome, Stats};

    use super::*;

    #[test]
    fn exit_codes_follow_verdict() {
        let ok = Verdict::from_outcome(RunOutcome::new(Stats::counts(1, 0, 0), None));
        let partial = Verdict::from_outcome(RunOutcome::new(Stats::counts(1, 1, 0), None));
        let inconclusive = Verdict::from_outcome(RunOutcome::new(Stats::default(), None));
        assert_eq!(exit_code(&ok), EXIT_SUCCESS);
        assert_eq!(exit_code(&partial), EXIT_PARTIAL_FAILURE);
        assert_eq!(exit_code(&inconclusive), EXIT_PARTIAL_FAILURE);
    }
}
