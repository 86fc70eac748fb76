use std::io;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Could not read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "AUTH_ERROR"),
            AppError::FileRead { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let error = match &self {
            AppError::FileRead { .. } => {
                tracing::error!("{self}");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorResponse { error, code })).into_response()
    }
}
