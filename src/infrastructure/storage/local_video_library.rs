use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{VideoLibrary, VideoLibraryError};
use crate::domain::{SanitizedWord, VIDEO_EXTENSION, VideoAsset, VideoLookup};

/// Read-only view over a directory of `<word>.mp4` clips.
pub struct LocalVideoLibrary {
    video_dir: PathBuf,
}

impl LocalVideoLibrary {
    pub fn new(video_dir: impl AsRef<Path>) -> Result<Self, VideoLibraryError> {
        let video_dir = video_dir.as_ref();
        let resolved = std::fs::canonicalize(video_dir).map_err(|e| {
            VideoLibraryError::DirectoryUnavailable(format!("{}: {}", video_dir.display(), e))
        })?;

        if !resolved.is_dir() {
            return Err(VideoLibraryError::DirectoryUnavailable(format!(
                "{} is not a directory",
                resolved.display()
            )));
        }

        Ok(Self {
            video_dir: resolved,
        })
    }

    pub fn video_dir(&self) -> &Path {
        &self.video_dir
    }
}

#[async_trait]
impl VideoLibrary for LocalVideoLibrary {
    async fn lookup(&self, word: &str) -> Result<VideoLookup, VideoLibraryError> {
        let key = SanitizedWord::new(word);
        if key.is_empty() {
            return Ok(VideoLookup::NotFound);
        }

        let path = self.video_dir.join(VideoAsset::filename_for(&key));
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {
                Ok(VideoLookup::Found(VideoAsset::new(&key, path, meta.len())))
            }
            Ok(_) => Ok(VideoLookup::NotFound),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(VideoLookup::NotFound),
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "Asset metadata read failed");
                Err(VideoLibraryError::Io(e))
            }
        }
    }

    async fn list_available(&self) -> Result<Vec<VideoAsset>, VideoLibraryError> {
        let mut entries = tokio::fs::read_dir(&self.video_dir).await?;
        let mut assets = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(VIDEO_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            // Only names a lookup can actually resolve are advertised.
            let key = SanitizedWord::new(stem);
            if key.as_str() != stem {
                tracing::debug!(file = %path.display(), "Skipping clip with non-canonical name");
                continue;
            }

            let meta = tokio::fs::metadata(&path).await?;
            if meta.is_file() {
                assets.push(VideoAsset::new(&key, path, meta.len()));
            }
        }

        assets.sort_by(|a, b| a.word.cmp(&b.word));
        Ok(assets)
    }
}
