use signbridge::domain::ConversionResult;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_found_and_missing_words_when_building_result_then_counts_match_lists() {
    let result = ConversionResult::new(
        "hello there".to_string(),
        "HELLO MISSING".to_string(),
        strings(&["HELLO", "MISSING"]),
        strings(&["videos/hello.mp4"]),
        strings(&["missing"]),
    );

    assert_eq!(result.total_words, 2);
    assert_eq!(result.found_count, 1);
    assert_eq!(result.missing_count, 1);
    assert_eq!(result.found_count + result.missing_count, result.total_words);
}

#[test]
fn given_no_tokens_when_building_result_then_everything_is_empty() {
    let result = ConversionResult::new(
        "...".to_string(),
        String::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );

    assert_eq!(result.total_words, 0);
    assert_eq!(result.found_count, 0);
    assert_eq!(result.missing_count, 0);
}
