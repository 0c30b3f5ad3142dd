mod ffmpeg_concatenator;
mod mock_concatenator;

pub use ffmpeg_concatenator::{FfmpegConcatenator, build_manifest, output_prefix};
pub use mock_concatenator::MockConcatenator;
