use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use super::error_response::{conversion_error_response, error_body};
use crate::application::ports::{VideoConcatenator, VideoLibrary};
use crate::domain::VideoLookup;
use crate::presentation::state::AppState;

pub const VIDEO_MIME: &str = "video/mp4";

#[derive(Serialize)]
pub struct VideoPathResponse {
    pub word: String,
    pub video_path: String,
}

#[tracing::instrument(skip(state))]
pub async fn video_path_handler<L, C>(
    State(state): State<AppState<L, C>>,
    Path(word): Path<String>,
) -> impl IntoResponse
where
    L: VideoLibrary + 'static,
    C: VideoConcatenator + 'static,
{
    match state.conversion_service.lookup_word(&word).await {
        Ok(VideoLookup::Found(asset)) => (
            StatusCode::OK,
            Json(VideoPathResponse {
                word,
                video_path: asset.relative_path,
            }),
        )
            .into_response(),
        Ok(VideoLookup::NotFound) => {
            tracing::debug!(word = %word, "Video not found");
            error_body(StatusCode::NOT_FOUND, "Video not found")
        }
        Err(e) => conversion_error_response(&e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn video_file_handler<L, C>(
    State(state): State<AppState<L, C>>,
    Path(word): Path<String>,
) -> impl IntoResponse
where
    L: VideoLibrary + 'static,
    C: VideoConcatenator + 'static,
{
    let asset = match state.conversion_service.lookup_word(&word).await {
        Ok(VideoLookup::Found(asset)) => asset,
        Ok(VideoLookup::NotFound) => return error_body(StatusCode::NOT_FOUND, "Video not found"),
        Err(e) => return conversion_error_response(&e),
    };

    match tokio::fs::read(&asset.path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, VIDEO_MIME)],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, path = %asset.path.display(), "Failed to read clip");
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read video: {}", e),
            )
        }
    }
}
