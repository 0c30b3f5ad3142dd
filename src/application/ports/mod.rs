mod text_generator;
mod video_concatenator;
mod video_library;

pub use text_generator::{TextGenerator, TextGeneratorError};
pub use video_concatenator::{ConcatenationError, VideoConcatenator};
pub use video_library::{VideoLibrary, VideoLibraryError};
