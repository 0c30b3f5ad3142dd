use regex::Regex;
use std::sync::LazyLock;

static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

const SENTENCE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']', '{', '}',
];

/// Splits generated text into maximal runs of word characters, left to right.
pub fn tokenize_words(text: &str) -> Vec<String> {
    WORD_RUN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Splits a user sentence on whitespace, lower-cased, with surrounding
/// punctuation stripped from each word.
pub fn split_sentence(sentence: &str) -> Vec<String> {
    sentence
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(SENTENCE_PUNCTUATION))
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}
