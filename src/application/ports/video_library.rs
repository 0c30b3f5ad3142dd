use std::io;

use async_trait::async_trait;

use crate::domain::{VideoAsset, VideoLookup};

#[async_trait]
pub trait VideoLibrary: Send + Sync {
    /// Absence is `VideoLookup::NotFound`, not an error.
    async fn lookup(&self, word: &str) -> Result<VideoLookup, VideoLibraryError>;

    async fn list_available(&self) -> Result<Vec<VideoAsset>, VideoLibraryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VideoLibraryError {
    #[error("asset directory unavailable: {0}")]
    DirectoryUnavailable(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
