use crate::db::StoreError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("password hashing failed: {0}")]
    Password(#[from] bcrypt::BcryptError),
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("malformed form upload: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Multipart(e) => {
                tracing::warn!("Rejected upload: {}", e);
                (StatusCode::BAD_REQUEST, format!("Error: {}", e)).into_response()
            }
            other => {
                tracing::error!("Error handling request: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error: something went wrong").into_response()
            }
        }
    }
}
