use std::fmt;

/// Lookup key derived from a raw word token.
///
/// Keeps only `[A-Za-z0-9_-]` and lower-cases the result. An empty key is a
/// valid value; it simply never matches an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedWord(String);

impl SanitizedWord {
    pub fn new(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .map(|c| c.to_ascii_lowercase())
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
