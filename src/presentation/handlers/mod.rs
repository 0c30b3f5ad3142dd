mod convert;
mod error_response;
mod health;
mod sentence;
mod video;
mod words;

pub use convert::{ConvertRequest, ConvertResponse, convert_handler};
pub use error_response::{ErrorResponse, conversion_error_response};
pub use health::health_handler;
pub use sentence::{MISSING_WORDS_HEADER, missing_words_header, sentence_handler};
pub use video::{VIDEO_MIME, video_file_handler, video_path_handler};
pub use words::{available_words_handler, words_lookup_handler};
