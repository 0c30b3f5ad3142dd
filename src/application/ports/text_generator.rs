use async_trait::async_trait;

/// Rewrites free-form English into sign English.
///
/// One call is one upstream request: no retries, caching or timeouts here.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, TextGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextGeneratorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("misconfigured: {0}")]
    Misconfigured(String),
}
