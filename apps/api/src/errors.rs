use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::completion::CompletionError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// User-facing messages stay generic; the machine-readable `detail`
/// field carries the underlying cause where it is safe to share.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, detail) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::Completion(e) => {
                tracing::error!("Completion error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMPLETION_ERROR",
                    "There was an error talking to the completion service. \
                     Please check the API key and logs."
                        .to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "Could not render the PDF document.".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(detail) = detail {
            error["detail"] = json!(detail);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_is_400_with_inline_message() {
        let err = AppError::Validation("Please enter at least a Role / Job Title.".to_string());
        let (status, json) = body_json(err.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            json["error"]["message"],
            "Please enter at least a Role / Job Title."
        );
        assert!(json["error"].get("detail").is_none());
    }

    #[tokio::test]
    async fn test_completion_error_is_502_with_generic_message() {
        let err = AppError::Completion(CompletionError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        });
        let (status, json) = body_json(err.into_response()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["code"], "COMPLETION_ERROR");
        let message = json["error"]["message"].as_str().unwrap();
        assert!(message.contains("error talking to the completion service"));
        let detail = json["error"]["detail"].as_str().unwrap();
        assert!(detail.contains("401"), "detail should carry the cause, got {detail}");
    }

    #[tokio::test]
    async fn test_render_error_is_500_with_detail() {
        let err = AppError::Render(RenderError::MissingAsset {
            path: "assets/brand_header.png".to_string(),
        });
        let (status, json) = body_json(err.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "RENDER_ERROR");
        assert!(json["error"]["detail"]
            .as_str()
            .unwrap()
            .contains("assets/brand_header.png"));
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let err = AppError::Internal(anyhow::anyhow!("secret wiring problem"));
        let (status, json) = body_json(err.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert!(json["error"].get("detail").is_none());
        assert!(!json.to_string().contains("secret wiring problem"));
    }
}
