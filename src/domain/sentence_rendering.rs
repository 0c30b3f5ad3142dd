use super::temporary_video::TemporaryVideo;
use super::video_asset::VideoAsset;

/// What a sentence request resolved to.
#[derive(Debug, PartialEq, Eq)]
pub enum SentenceRendering {
    /// Individual clip references, returned when concatenation was not requested.
    Clips {
        words: Vec<String>,
        video_paths: Vec<String>,
        missing_words: Vec<String>,
    },
    /// Exactly one clip was found; it is served as-is.
    Single {
        asset: VideoAsset,
        missing_words: Vec<String>,
    },
    /// Joined clips. Dropping the rendering removes the file.
    Concatenated {
        output: TemporaryVideo,
        clip_count: usize,
        missing_words: Vec<String>,
    },
}
