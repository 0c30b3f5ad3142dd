use std::sync::Arc;

use crate::application::ports::{TextGenerator, TextGeneratorError};
use crate::presentation::config::{GeneratorProvider, GeneratorSettings};

use super::gemini_client::GeminiTextGenerator;
use super::openai_client::OpenAiTextGenerator;
use super::passthrough_generator::PassthroughTextGenerator;

pub struct TextGeneratorFactory;

impl TextGeneratorFactory {
    pub fn create(
        settings: &GeneratorSettings,
    ) -> Result<Arc<dyn TextGenerator>, TextGeneratorError> {
        match settings.provider {
            GeneratorProvider::Gemini => {
                Self::require_api_key(settings)?;
                Ok(Arc::new(GeminiTextGenerator::new(
                    settings.api_key.clone(),
                    settings.model.clone(),
                    settings.base_url.clone(),
                    settings.temperature,
                )))
            }
            GeneratorProvider::OpenAi => {
                Self::require_api_key(settings)?;
                Ok(Arc::new(OpenAiTextGenerator::new(
                    settings.api_key.clone(),
                    settings.model.clone(),
                    settings.base_url.clone(),
                    settings.temperature,
                )))
            }
            GeneratorProvider::Passthrough => Ok(Arc::new(PassthroughTextGenerator)),
        }
    }

    fn require_api_key(settings: &GeneratorSettings) -> Result<(), TextGeneratorError> {
        if settings.api_key.trim().is_empty() {
            return Err(TextGeneratorError::Misconfigured(format!(
                "api_key required for {} provider",
                settings.provider
            )));
        }
        Ok(())
    }
}
