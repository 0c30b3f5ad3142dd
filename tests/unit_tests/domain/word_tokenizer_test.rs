use signbridge::domain::{split_sentence, tokenize_words};

#[test]
fn given_generated_text_when_tokenizing_then_returns_words_in_order() {
    assert_eq!(tokenize_words("HELLO WORLD"), vec!["HELLO", "WORLD"]);
}

#[test]
fn given_punctuation_when_tokenizing_then_it_separates_words() {
    assert_eq!(
        tokenize_words("ME, GO-STORE! you?"),
        vec!["ME", "GO", "STORE", "you"]
    );
}

#[test]
fn given_repeated_words_when_tokenizing_then_duplicates_are_kept() {
    assert_eq!(tokenize_words("the the THE"), vec!["the", "the", "THE"]);
}

#[test]
fn given_underscores_and_digits_when_tokenizing_then_they_belong_to_the_word() {
    assert_eq!(tokenize_words("word_1 2nd"), vec!["word_1", "2nd"]);
}

#[test]
fn given_empty_or_punctuation_only_text_when_tokenizing_then_returns_nothing() {
    assert!(tokenize_words("").is_empty());
    assert!(tokenize_words("  ...!?  ").is_empty());
}

#[test]
fn given_same_text_when_tokenizing_twice_then_results_match() {
    let text = "I  go\tstore,\nbuy MILK.";
    assert_eq!(tokenize_words(text), tokenize_words(text));
}

#[test]
fn given_sentence_when_splitting_then_lowercases_and_strips_edges() {
    assert_eq!(
        split_sentence("Hello, World! (Nice) day."),
        vec!["hello", "world", "nice", "day"]
    );
}

#[test]
fn given_inner_apostrophe_when_splitting_then_word_is_kept_whole() {
    assert_eq!(split_sentence("don't stop"), vec!["don't", "stop"]);
}

#[test]
fn given_punctuation_only_tokens_when_splitting_then_they_are_dropped() {
    assert_eq!(split_sentence("hi ... !!! there"), vec!["hi", "there"]);
    assert!(split_sentence("   ").is_empty());
}
