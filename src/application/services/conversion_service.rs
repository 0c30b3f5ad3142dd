use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;

use crate::application::ports::{
    ConcatenationError, TextGenerator, TextGeneratorError, VideoConcatenator, VideoLibrary,
    VideoLibraryError,
};
use crate::domain::{
    ConversionResult, SentenceRendering, VideoAsset, VideoLookup, WordLookupBatch, split_sentence,
    tokenize_words,
};

pub const DEFAULT_MAX_INPUT_CHARS: usize = 1000;

/// Text → sign English → per-word clips pipeline.
pub struct ConversionService<L, C>
where
    L: VideoLibrary,
    C: VideoConcatenator,
{
    text_generator: Arc<dyn TextGenerator>,
    video_library: Arc<L>,
    concatenator: Arc<C>,
    max_input_chars: usize,
}

impl<L, C> ConversionService<L, C>
where
    L: VideoLibrary,
    C: VideoConcatenator,
{
    pub fn new(
        text_generator: Arc<dyn TextGenerator>,
        video_library: Arc<L>,
        concatenator: Arc<C>,
        max_input_chars: usize,
    ) -> Self {
        Self {
            text_generator,
            video_library,
            concatenator,
            max_input_chars,
        }
    }

    pub async fn convert(&self, text: &str) -> Result<ConversionResult, ConversionError> {
        self.validate_text(text)?;

        let generated_text = self
            .text_generator
            .generate(text)
            .await
            .map_err(ConversionError::GenerationFailed)?;

        let tokens = tokenize_words(&generated_text);
        let lookups = self.lookup_all(&tokens).await?;

        let mut video_paths = Vec::new();
        let mut missing_words = Vec::new();
        for (token, lookup) in tokens.iter().zip(lookups) {
            match lookup {
                VideoLookup::Found(asset) => video_paths.push(asset.relative_path),
                VideoLookup::NotFound => {
                    tracing::debug!(word = %token, "No clip for word");
                    missing_words.push(token.to_lowercase());
                }
            }
        }

        let result = ConversionResult::new(
            text.to_string(),
            generated_text,
            tokens,
            video_paths,
            missing_words,
        );

        tracing::info!(
            total_words = result.total_words,
            found = result.found_count,
            missing = result.missing_count,
            "Conversion completed"
        );

        Ok(result)
    }

    pub async fn render_sentence(
        &self,
        sentence: &str,
        concatenate: bool,
    ) -> Result<SentenceRendering, ConversionError> {
        self.validate_text(sentence)?;

        let words = split_sentence(sentence);
        if words.is_empty() {
            return Err(ConversionError::InvalidInput(
                "no valid words found in sentence".to_string(),
            ));
        }

        let lookups = self.lookup_all(&words).await?;

        let mut found: Vec<VideoAsset> = Vec::new();
        let mut missing_words = Vec::new();
        for (word, lookup) in words.iter().zip(lookups) {
            match lookup {
                VideoLookup::Found(asset) => found.push(asset),
                VideoLookup::NotFound => missing_words.push(word.clone()),
            }
        }

        if !missing_words.is_empty() {
            tracing::warn!(missing = ?missing_words, "Some words have no clip");
        }

        if !concatenate {
            return Ok(SentenceRendering::Clips {
                video_paths: found.into_iter().map(|a| a.relative_path).collect(),
                words,
                missing_words,
            });
        }

        if found.len() <= 1 {
            return match found.pop() {
                Some(asset) => Ok(SentenceRendering::Single {
                    asset,
                    missing_words,
                }),
                None => Err(ConversionError::NoVideosFound {
                    missing: missing_words,
                }),
            };
        }

        let paths: Vec<PathBuf> = found.into_iter().map(|a| a.path).collect();
        let output = self
            .concatenator
            .concatenate(&paths, &words)
            .await
            .map_err(ConversionError::ConcatenationFailed)?;

        Ok(SentenceRendering::Concatenated {
            output,
            clip_count: paths.len(),
            missing_words,
        })
    }

    pub async fn lookup_word(&self, word: &str) -> Result<VideoLookup, ConversionError> {
        if word.trim().is_empty() {
            return Err(ConversionError::InvalidInput("word is empty".to_string()));
        }

        Ok(self.video_library.lookup(word.trim()).await?)
    }

    pub async fn lookup_words(&self, words: &[String]) -> Result<WordLookupBatch, ConversionError> {
        let words: Vec<String> = words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(String::from)
            .collect();

        if words.is_empty() {
            return Err(ConversionError::InvalidInput(
                "no valid words provided".to_string(),
            ));
        }

        let length: usize = words.iter().map(|w| w.chars().count()).sum();
        self.check_length(length)?;

        let lookups = self.lookup_all(&words).await?;

        let mut batch = WordLookupBatch::default();
        for (word, lookup) in words.into_iter().zip(lookups) {
            batch.push(word, lookup);
        }
        Ok(batch)
    }

    pub async fn available_words(&self) -> Result<Vec<VideoAsset>, ConversionError> {
        Ok(self.video_library.list_available().await?)
    }

    fn validate_text(&self, text: &str) -> Result<(), ConversionError> {
        if text.trim().is_empty() {
            return Err(ConversionError::InvalidInput(
                "input text cannot be empty".to_string(),
            ));
        }

        self.check_length(text.chars().count())
    }

    fn check_length(&self, length: usize) -> Result<(), ConversionError> {
        if length > self.max_input_chars {
            return Err(ConversionError::InvalidInput(format!(
                "input is {} characters, maximum is {}",
                length, self.max_input_chars
            )));
        }

        Ok(())
    }

    /// Looks up all words concurrently; results come back in input order.
    async fn lookup_all(&self, words: &[String]) -> Result<Vec<VideoLookup>, ConversionError> {
        join_all(words.iter().map(|w| self.video_library.lookup(w)))
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(ConversionError::Library)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("generation failed: {0}")]
    GenerationFailed(#[source] TextGeneratorError),
    #[error("video library: {0}")]
    Library(#[from] VideoLibraryError),
    #[error("no videos found for any word; missing: {}", .missing.join(", "))]
    NoVideosFound { missing: Vec<String> },
    #[error("concatenation failed: {0}")]
    ConcatenationFailed(#[source] ConcatenationError),
}
