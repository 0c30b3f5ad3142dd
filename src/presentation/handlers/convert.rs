use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error_response::conversion_error_response;
use crate::application::ports::{VideoConcatenator, VideoLibrary};
use crate::domain::ConversionResult;
use crate::infrastructure::observability::redact_for_log;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ConvertRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ConvertResponse {
    pub original_text: String,
    pub generated_text: String,
    pub words: Vec<String>,
    pub video_paths: Vec<String>,
    pub missing_words: Vec<String>,
    pub total_words: usize,
    pub found_count: usize,
    pub missing_count: usize,
}

impl From<ConversionResult> for ConvertResponse {
    fn from(result: ConversionResult) -> Self {
        Self {
            original_text: result.original_text,
            generated_text: result.generated_text,
            words: result.words,
            video_paths: result.video_paths,
            missing_words: result.missing_words,
            total_words: result.total_words,
            found_count: result.found_count,
            missing_count: result.missing_count,
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn convert_handler<L, C>(
    State(state): State<AppState<L, C>>,
    Json(request): Json<ConvertRequest>,
) -> impl IntoResponse
where
    L: VideoLibrary + 'static,
    C: VideoConcatenator + 'static,
{
    tracing::debug!(text = %redact_for_log(&request.text), "Converting text");

    match state.conversion_service.convert(&request.text).await {
        Ok(result) => (StatusCode::OK, Json(ConvertResponse::from(result))).into_response(),
        Err(e) => conversion_error_response(&e),
    }
}
