/// Aggregate produced by one text-to-video conversion.
///
/// Every token occurrence is looked up on its own, so repeated words yield
/// repeated paths. `found_count + missing_count == total_words` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub original_text: String,
    pub generated_text: String,
    pub words: Vec<String>,
    pub video_paths: Vec<String>,
    pub missing_words: Vec<String>,
    pub total_words: usize,
    pub found_count: usize,
    pub missing_count: usize,
}

impl ConversionResult {
    pub fn new(
        original_text: String,
        generated_text: String,
        words: Vec<String>,
        video_paths: Vec<String>,
        missing_words: Vec<String>,
    ) -> Self {
        Self {
            original_text,
            generated_text,
            total_words: words.len(),
            found_count: video_paths.len(),
            missing_count: missing_words.len(),
            words,
            video_paths,
            missing_words,
        }
    }
}
