use signbridge::domain::SanitizedWord;

#[test]
fn given_mixed_case_word_when_sanitizing_then_lowercases() {
    assert_eq!(SanitizedWord::new("HeLLo").as_str(), "hello");
}

#[test]
fn given_word_with_punctuation_when_sanitizing_then_strips_it() {
    assert_eq!(SanitizedWord::new("hello!?").as_str(), "hello");
    assert_eq!(SanitizedWord::new("'quoted'").as_str(), "quoted");
}

#[test]
fn given_path_traversal_attempt_when_sanitizing_then_separators_are_removed() {
    assert_eq!(SanitizedWord::new("../../etc/passwd").as_str(), "etcpasswd");
}

#[test]
fn given_underscore_and_hyphen_when_sanitizing_then_they_are_kept() {
    assert_eq!(SanitizedWord::new("thank-you_2").as_str(), "thank-you_2");
}

#[test]
fn given_non_ascii_letters_when_sanitizing_then_they_are_dropped() {
    assert_eq!(SanitizedWord::new("café").as_str(), "caf");
}

#[test]
fn given_only_punctuation_when_sanitizing_then_result_is_empty() {
    let word = SanitizedWord::new("?!...");
    assert!(word.is_empty());
    assert_eq!(word.as_str(), "");
}

#[test]
fn given_sanitized_word_when_sanitizing_again_then_result_is_unchanged() {
    for raw in ["Hello", "WORLD!", "it's", "a-b_c", "ÄÖÜ", "", "  spaced  "] {
        let once = SanitizedWord::new(raw);
        let twice = SanitizedWord::new(once.as_str());
        assert_eq!(once, twice, "not idempotent for {:?}", raw);
    }
}

#[test]
fn given_sanitized_word_when_displayed_then_matches_as_str() {
    let word = SanitizedWord::new("Hello");
    assert_eq!(format!("{}", word), word.as_str());
}
