use std::path::PathBuf;
use std::sync::Mutex;

use crate::application::ports::{ConcatenationError, VideoConcatenator};
use crate::domain::TemporaryVideo;

/// Records every request and answers with a fixed path or a tool failure.
///
/// A successful answer takes ownership of the path, so a file there is
/// removed when the caller drops the result.
pub struct MockConcatenator {
    output: Result<PathBuf, String>,
    requests: Mutex<Vec<(Vec<PathBuf>, Vec<String>)>>,
}

impl MockConcatenator {
    pub fn succeeding(output: impl Into<PathBuf>) -> Self {
        Self {
            output: Ok(output.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(stderr: impl Into<String>) -> Self {
        Self {
            output: Err(stderr.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(Vec<PathBuf>, Vec<String>)> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl VideoConcatenator for MockConcatenator {
    async fn concatenate(
        &self,
        paths: &[PathBuf],
        name_hint: &[String],
    ) -> Result<TemporaryVideo, ConcatenationError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((paths.to_vec(), name_hint.to_vec()));
        }

        self.output
            .clone()
            .map(TemporaryVideo::from_path)
            .map_err(|stderr| ConcatenationError::ToolFailed {
                status: "exit status: 1".to_string(),
                stderr,
            })
    }
}
