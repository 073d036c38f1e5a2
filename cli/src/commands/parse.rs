use robotrun_core::api::{analyze_artifacts, CliError};

use crate::commands::cli::ParseArgs;
use crate::commands::execute::{exit_code, print_json};

/// Offline extraction over artifacts of a finished run.
pub fn handle_parse(args: ParseArgs) -> Result<i32, CliError> {
    if args.report.is_none() && args.console.is_none() {
        return Err(CliError::Command(
            "parse needs --report, --console, or both".to_string(),
        ));
    }

    let console = match &args.console {
        Some(path) => std::fs::read_to_string(path)?,
        None => String::new(),
    };

    let verdict = analyze_artifacts(args.report.as_deref(), &console);
    let body = serde_json::to_value(verdict.outcome()).map_err(|e| CliError::Command(e.to_string()))?;
    print_json(body)?;
    Ok(exit_code(&verdict))
}
