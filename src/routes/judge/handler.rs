use axum::extract::{Json, Path, State};
use serde_json::Value;

use super::model::{SubmitCodeRequest, SubmitCodeResponse};
use crate::{AppState, clients::JudgeError, error::AppError};

#[axum::debug_handler]
pub async fn submit_code(
    State(state): State<AppState>,
    Json(req): Json<SubmitCodeRequest>,
) -> Result<Json<SubmitCodeResponse>, AppError> {
    match state.judge.submit(&req.into()).await {
        Ok(token) => Ok(Json(SubmitCodeResponse { token })),
        Err(e) => {
            tracing::error!("Error submitting code to Judge0: {}", e);
            Err(AppError::FailedToSubmitCode)
        }
    }
}

#[axum::debug_handler]
pub async fn check_result(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Value>, AppError> {
    match state.judge.fetch(&token).await {
        Ok(result) => Ok(Json(result)),
        // 判题服务自己的错误（例如未知 token）原样转发
        Err(JudgeError::Status { status, body }) => {
            tracing::warn!("Judge0 rejected result lookup for {}: {}", token, status);
            Err(AppError::Upstream { status, body })
        }
        Err(e) => {
            tracing::error!("Error checking result from Judge0: {}", e);
            Err(AppError::FailedToCheckResult)
        }
    }
}
