use async_trait::async_trait;

use crate::application::ports::{TextGenerator, TextGeneratorError};

/// Returns the prompt unchanged. Lets the service run without an API key.
pub struct PassthroughTextGenerator;

#[async_trait]
impl TextGenerator for PassthroughTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, TextGeneratorError> {
        Ok(prompt.to_string())
    }
}
