mod conversion_service;

pub use conversion_service::{ConversionError, ConversionService, DEFAULT_MAX_INPUT_CHARS};
