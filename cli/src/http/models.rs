use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use robotrun_core::api::ExecutionFailure;

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub session_id: String,
    pub uptime_seconds: u64,
    pub requests_handled: u64,
    pub timestamp: String,
}

/// Body returned when the runner could not run at all.
pub fn failure_body(failure: &ExecutionFailure) -> Value {
    json!({
        "success": false,
        "output": failure.output,
        "stats": null,
        "errorMessage": failure.error_message,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum HttpServerError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Execution(#[from] ExecutionFailure),
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        match self {
            HttpServerError::InvalidRequest(error) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": error })),
            )
                .into_response(),
            HttpServerError::Execution(failure) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(failure_body(&failure))).into_response()
            }
        }
    }
}
