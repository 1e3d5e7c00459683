use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("Snippet not found")]
    SnippetNotFound,
    #[error("Failed to add snippet")]
    FailedToAddSnippet,
    #[error("Failed to update cache")]
    FailedToUpdateCache,
    #[error("Failed to fetch snippets")]
    FailedToFetchSnippets,
    #[error("Failed to fetch snippets from cache")]
    FailedToFetchFromCache,
    #[error("Failed to fetch snippet")]
    FailedToFetchSnippet,
    #[error("Failed to delete snippet")]
    FailedToDeleteSnippet,
    #[error("Failed to submit code")]
    FailedToSubmitCode,
    #[error("Failed to check result")]
    FailedToCheckResult,
    /// 判题服务返回的错误状态，原样转发
    #[error("judge0 responded with status {status}")]
    Upstream {
        status: u16,
        body: serde_json::Value,
    },
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::SnippetNotFound => StatusCode::NOT_FOUND,
            AppError::Upstream { status, body } => {
                let status =
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                return (status, Json(body.clone())).into_response();
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generic_failure_is_500_with_message() {
        let response = AppError::FailedToAddSnippet.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Failed to add snippet" })
        );
    }

    #[tokio::test]
    async fn test_upstream_error_forwarded_verbatim() {
        let payload = serde_json::json!({ "error": "Not found" });
        let response = AppError::Upstream {
            status: 404,
            body: payload.clone(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, payload);
    }

    #[tokio::test]
    async fn test_validation_is_400() {
        let response = AppError::Validation("Unsupported language: Cobol".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
