mod conversion_result;
mod sanitized_word;
mod sentence_rendering;
mod temporary_video;
mod video_asset;
mod word_lookup;
mod word_tokenizer;

pub use conversion_result::ConversionResult;
pub use sanitized_word::SanitizedWord;
pub use sentence_rendering::SentenceRendering;
pub use temporary_video::TemporaryVideo;
pub use video_asset::{PUBLIC_VIDEO_PREFIX, VIDEO_EXTENSION, VideoAsset, VideoLookup};
pub use word_lookup::{WordLookupBatch, WordLookupEntry};
pub use word_tokenizer::{split_sentence, tokenize_words};
