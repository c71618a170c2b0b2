use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// User-facing failure kinds. Raw provider errors are logged where they
/// happen; only the fixed messages carried here reach the caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Generation(String),

    #[error("{0}")]
    Provider(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Provider(_) => StatusCode::BAD_GATEWAY,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
