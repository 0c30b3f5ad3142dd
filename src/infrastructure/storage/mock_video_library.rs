use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::application::ports::{VideoLibrary, VideoLibraryError};
use crate::domain::{SanitizedWord, VideoAsset, VideoLookup};

/// In-memory library that answers from a fixed word set and counts lookups.
#[derive(Default)]
pub struct MockVideoLibrary {
    words: HashSet<String>,
    latency: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl MockVideoLibrary {
    pub fn with_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Delays answers for `word`, to shuffle completion order in tests.
    pub fn with_latency(mut self, word: &str, latency: Duration) -> Self {
        self.latency.insert(word.to_string(), latency);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn asset_for(key: &SanitizedWord) -> VideoAsset {
        let path = PathBuf::from("/mock/videos").join(VideoAsset::filename_for(key));
        VideoAsset::new(key, path, 1024)
    }
}

#[async_trait::async_trait]
impl VideoLibrary for MockVideoLibrary {
    async fn lookup(&self, word: &str) -> Result<VideoLookup, VideoLibraryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = SanitizedWord::new(word);

        if let Some(latency) = self.latency.get(key.as_str()) {
            tokio::time::sleep(*latency).await;
        }

        if self.words.contains(key.as_str()) {
            Ok(VideoLookup::Found(Self::asset_for(&key)))
        } else {
            Ok(VideoLookup::NotFound)
        }
    }

    async fn list_available(&self) -> Result<Vec<VideoAsset>, VideoLibraryError> {
        let mut assets: Vec<VideoAsset> = self
            .words
            .iter()
            .map(|w| Self::asset_for(&SanitizedWord::new(w)))
            .collect();
        assets.sort_by(|a, b| a.word.cmp(&b.word));
        Ok(assets)
    }
}
