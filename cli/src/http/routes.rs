//! Route handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;

use robotrun_core::api::{execute_robot_test, ExecuteArgs, ExecutionFailure, RunOutcome, Verdict};

use crate::http::{
    models::{ExecuteRequest, HealthResponse, HttpServerError},
    state::AppState,
    validation::validate_url,
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/robot/execute", post(execute_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// POST /robot/execute
async fn execute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExecuteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RunOutcome>), HttpServerError> {
    state.stats_mut().requests_total += 1;

    let Json(req) = payload.map_err(|e| reject(&state, e.body_text()))?;
    let url = validate_url(req.url.as_deref().unwrap_or_default()).map_err(|e| reject(&state, e))?;

    let run = async {
        let _run = state.run_lock.lock().await;
        state.stats_mut().runs_total += 1;
        execute_robot_test(ExecuteArgs {
            runner: state.runner.as_ref(),
            url,
            report_path: &state.report_path,
        })
        .await
    };
    let result = match tokio::time::timeout(state.run_deadline, run).await {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(target: "robotrun.http", deadline_ms = state.run_deadline.as_millis() as u64, "robot run exceeded deadline");
            let reason = format!("run did not finish within {}s", state.run_deadline.as_secs_f32());
            Err(ExecutionFailure {
                output: reason.clone(),
                error_message: format!("robot test execution failed: {reason}"),
            })
        }
    };

    match result {
        Ok(Verdict::Completed(outcome)) => Ok((StatusCode::OK, Json(outcome))),
        Ok(Verdict::PartialFailure(outcome)) => Ok((StatusCode::FAILED_DEPENDENCY, Json(outcome))),
        Err(failure) => {
            state.stats_mut().errors_total += 1;
            Err(failure.into())
        }
    }
}

fn reject(state: &AppState, reason: String) -> HttpServerError {
    state.stats_mut().errors_total += 1;
    HttpServerError::InvalidRequest(reason)
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.stats();

    Json(HealthResponse {
        status: "healthy".into(),
        session_id: state.session_id.clone(),
        uptime_seconds: stats.uptime_seconds(),
        requests_handled: stats.requests_total,
        timestamp: Local::now().to_rfc3339(),
    })
}
