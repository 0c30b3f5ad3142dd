use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::TemporaryVideo;

#[async_trait]
pub trait VideoConcatenator: Send + Sync {
    /// Joins `paths` in order into one new file owned by the caller.
    ///
    /// `name_hint` only shapes the output filename. Temporary artifacts never
    /// outlive the call on failure or cancellation, and the returned file is
    /// removed once the caller drops it.
    async fn concatenate(
        &self,
        paths: &[PathBuf],
        name_hint: &[String],
    ) -> Result<TemporaryVideo, ConcatenationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConcatenationError {
    #[error("no input clips to concatenate")]
    NoInputs,
    #[error("failed to prepare temporary files: {0}")]
    TempFile(#[source] io::Error),
    #[error("failed to launch media tool: {0}")]
    SpawnFailed(#[source] io::Error),
    #[error("media tool exited with {status}: {stderr}")]
    ToolFailed { status: String, stderr: String },
    #[error("media tool produced no output")]
    EmptyOutput,
}
