use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{TextGenerator, TextGeneratorError};

pub struct MockTextGenerator {
    response: Result<String, String>,
    calls: AtomicUsize,
}

impl MockTextGenerator {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, TextGeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .map_err(TextGeneratorError::ApiRequestFailed)
    }
}
