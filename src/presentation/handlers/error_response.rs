use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::TextGeneratorError;
use crate::application::services::ConversionError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn conversion_error_response(error: &ConversionError) -> Response {
    let status = match error {
        ConversionError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ConversionError::GenerationFailed(TextGeneratorError::RateLimited) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ConversionError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
        ConversionError::NoVideosFound { .. } => StatusCode::NOT_FOUND,
        ConversionError::Library(_) | ConversionError::ConcatenationFailed(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::warn!(error = %error, "Request rejected");
    }

    error_body(status, error.to_string())
}
