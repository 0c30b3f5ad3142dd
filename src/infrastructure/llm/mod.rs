mod gemini_client;
mod mock_text_generator;
mod openai_client;
mod passthrough_generator;
mod sign_prompt;
mod text_generator_factory;

pub use gemini_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiTextGenerator};
pub use mock_text_generator::MockTextGenerator;
pub use openai_client::{DEFAULT_OPENAI_BASE_URL, OpenAiTextGenerator};
pub use passthrough_generator::PassthroughTextGenerator;
pub use sign_prompt::{SIGN_ENGLISH_INSTRUCTION, build_sign_prompt};
pub use text_generator_factory::TextGeneratorFactory;
