use std::io;
use std::path::Path;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::error_response::{conversion_error_response, error_body};
use super::video::VIDEO_MIME;
use crate::application::ports::{VideoConcatenator, VideoLibrary};
use crate::domain::SentenceRendering;
use crate::infrastructure::observability::redact_for_log;
use crate::presentation::state::AppState;

pub const MISSING_WORDS_HEADER: &str = "x-missing-words";

#[derive(Deserialize)]
pub struct SentenceRequest {
    pub sentence: String,
    #[serde(default = "default_concatenate")]
    pub concatenate: bool,
}

fn default_concatenate() -> bool {
    true
}

#[derive(Serialize)]
pub struct SentenceClipsResponse {
    pub sentence: String,
    pub words: Vec<String>,
    pub video_paths: Vec<String>,
    pub missing_words: Vec<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn sentence_handler<L, C>(
    State(state): State<AppState<L, C>>,
    Json(request): Json<SentenceRequest>,
) -> Response
where
    L: VideoLibrary + 'static,
    C: VideoConcatenator + 'static,
{
    tracing::debug!(
        sentence = %redact_for_log(&request.sentence),
        concatenate = request.concatenate,
        "Rendering sentence"
    );

    let rendering = match state
        .conversion_service
        .render_sentence(&request.sentence, request.concatenate)
        .await
    {
        Ok(rendering) => rendering,
        Err(e) => return conversion_error_response(&e),
    };

    match rendering {
        SentenceRendering::Clips {
            words,
            video_paths,
            missing_words,
        } => (
            StatusCode::OK,
            Json(SentenceClipsResponse {
                sentence: request.sentence,
                words,
                video_paths,
                missing_words,
            }),
        )
            .into_response(),
        SentenceRendering::Single {
            asset,
            missing_words,
        } => match tokio::fs::read(&asset.path).await {
            Ok(bytes) => video_attachment(
                bytes,
                &format!("sign_language_{}.mp4", asset.word),
                &missing_words,
            ),
            Err(e) => read_failure(&asset.path, e),
        },
        // `output` deletes the joined file when it goes out of scope,
        // including when this future is dropped mid-read.
        SentenceRendering::Concatenated {
            output,
            clip_count,
            missing_words,
        } => match tokio::fs::read(output.path()).await {
            Ok(bytes) => {
                tracing::info!(clips = clip_count, bytes = bytes.len(), "Serving concatenated video");
                video_attachment(bytes, "sign_language_sentence.mp4", &missing_words)
            }
            Err(e) => read_failure(output.path(), e),
        },
    }
}

fn video_attachment(bytes: Vec<u8>, filename: &str, missing_words: &[String]) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(VIDEO_MIME));
    if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename)) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    if !missing_words.is_empty() {
        match HeaderValue::from_str(&missing_words_header(missing_words)) {
            Ok(value) => {
                headers.insert(MISSING_WORDS_HEADER, value);
            }
            Err(e) => tracing::warn!(error = %e, "Could not encode missing words header"),
        }
    }

    (StatusCode::OK, headers, bytes).into_response()
}

/// Comma-separated list with each word percent-encoded, so non-ASCII words
/// and commas inside words survive the header.
pub fn missing_words_header(missing_words: &[String]) -> String {
    missing_words
        .iter()
        .map(|w| urlencoding::encode(w).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

fn read_failure(path: &Path, error: io::Error) -> Response {
    tracing::error!(error = %error, path = %path.display(), "Failed to read video");
    error_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Failed to read video: {}", error),
    )
}
