use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error_response::conversion_error_response;
use crate::application::ports::{VideoConcatenator, VideoLibrary};
use crate::domain::{VideoAsset, VideoLookup, WordLookupBatch};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct WordsLookupRequest {
    pub words: Vec<String>,
}

#[derive(Serialize)]
pub struct WordLookupResult {
    pub word: String,
    pub status: &'static str,
    pub video_path: Option<String>,
    pub file_size: Option<u64>,
}

#[derive(Serialize)]
pub struct WordsLookupSummary {
    pub total_words: usize,
    pub found: usize,
    pub missing: usize,
    pub found_words: Vec<String>,
    pub missing_words: Vec<String>,
}

#[derive(Serialize)]
pub struct WordsLookupResponse {
    pub results: Vec<WordLookupResult>,
    pub summary: WordsLookupSummary,
}

impl From<WordLookupBatch> for WordsLookupResponse {
    fn from(batch: WordLookupBatch) -> Self {
        let found_words = batch.found_words();
        let missing_words = batch.missing_words();
        let summary = WordsLookupSummary {
            total_words: batch.len(),
            found: found_words.len(),
            missing: missing_words.len(),
            found_words,
            missing_words,
        };

        let results = batch
            .entries
            .into_iter()
            .map(|entry| match entry.lookup {
                VideoLookup::Found(asset) => WordLookupResult {
                    word: entry.word,
                    status: "found",
                    video_path: Some(asset.relative_path),
                    file_size: Some(asset.size_bytes),
                },
                VideoLookup::NotFound => WordLookupResult {
                    word: entry.word,
                    status: "not_found",
                    video_path: None,
                    file_size: None,
                },
            })
            .collect();

        Self { results, summary }
    }
}

#[derive(Serialize)]
pub struct AvailableWord {
    pub word: String,
    pub filename: String,
    pub video_path: String,
    pub size: u64,
}

#[derive(Serialize)]
pub struct AvailableWordsResponse {
    pub word_count: usize,
    pub words: Vec<String>,
    pub video_details: Vec<AvailableWord>,
}

impl From<Vec<VideoAsset>> for AvailableWordsResponse {
    fn from(assets: Vec<VideoAsset>) -> Self {
        Self {
            word_count: assets.len(),
            words: assets.iter().map(|a| a.word.clone()).collect(),
            video_details: assets
                .into_iter()
                .map(|a| AvailableWord {
                    word: a.word,
                    filename: a.filename,
                    video_path: a.relative_path,
                    size: a.size_bytes,
                })
                .collect(),
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn words_lookup_handler<L, C>(
    State(state): State<AppState<L, C>>,
    Json(request): Json<WordsLookupRequest>,
) -> impl IntoResponse
where
    L: VideoLibrary + 'static,
    C: VideoConcatenator + 'static,
{
    match state.conversion_service.lookup_words(&request.words).await {
        Ok(batch) => {
            let response = WordsLookupResponse::from(batch);
            tracing::info!(
                found = response.summary.found,
                missing = response.summary.missing,
                "Batch lookup completed"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => conversion_error_response(&e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn available_words_handler<L, C>(
    State(state): State<AppState<L, C>>,
) -> impl IntoResponse
where
    L: VideoLibrary + 'static,
    C: VideoConcatenator + 'static,
{
    match state.conversion_service.available_words().await {
        Ok(assets) => (StatusCode::OK, Json(AvailableWordsResponse::from(assets))).into_response(),
        Err(e) => conversion_error_response(&e),
    }
}
