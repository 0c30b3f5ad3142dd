use std::path::PathBuf;

use super::sanitized_word::SanitizedWord;

pub const VIDEO_EXTENSION: &str = "mp4";
pub const PUBLIC_VIDEO_PREFIX: &str = "videos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAsset {
    pub word: String,
    pub filename: String,
    pub path: PathBuf,
    pub relative_path: String,
    pub size_bytes: u64,
}

impl VideoAsset {
    pub fn new(word: &SanitizedWord, path: PathBuf, size_bytes: u64) -> Self {
        let filename = Self::filename_for(word);
        Self {
            word: word.as_str().to_string(),
            relative_path: format!("{}/{}", PUBLIC_VIDEO_PREFIX, filename),
            filename,
            path,
            size_bytes,
        }
    }

    pub fn filename_for(word: &SanitizedWord) -> String {
        format!("{}.{}", word.as_str(), VIDEO_EXTENSION)
    }
}

/// Outcome of probing the asset directory for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoLookup {
    Found(VideoAsset),
    NotFound,
}

impl VideoLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, VideoLookup::Found(_))
    }

    pub fn asset(&self) -> Option<&VideoAsset> {
        match self {
            VideoLookup::Found(asset) => Some(asset),
            VideoLookup::NotFound => None,
        }
    }
}
