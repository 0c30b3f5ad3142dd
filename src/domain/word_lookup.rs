use super::video_asset::VideoLookup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLookupEntry {
    pub word: String,
    pub lookup: VideoLookup,
}

/// Per-word lookup outcomes for an explicit list of words, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordLookupBatch {
    pub entries: Vec<WordLookupEntry>,
}

impl WordLookupBatch {
    pub fn push(&mut self, word: String, lookup: VideoLookup) {
        self.entries.push(WordLookupEntry { word, lookup });
    }

    pub fn found_words(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.lookup.is_found())
            .map(|e| e.word.clone())
            .collect()
    }

    pub fn missing_words(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| !e.lookup.is_found())
            .map(|e| e.word.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
