use boggle_solver::{build_dictionary, parse_word_list, Dictionary, WordIndex};

fn get_test_words() -> Vec<&'static str> {
    vec!["cat", "cats", "catch", "dog", "dogs", "doge", "zebra", "at", "a"]
}

#[test]
fn test_short_words_are_dropped() {
    let dict = build_dictionary(get_test_words());
    assert_eq!(dict.len(), 5);
    assert!(!dict.is_word("cat"));
    assert!(!dict.is_word("dog"));
    assert!(dict.is_word("cats"));
    assert!(dict.is_word("zebra"));
}

#[test]
fn test_custom_min_length() {
    let dict = Dictionary::build(get_test_words(), 2);
    assert!(dict.is_word("at"));
    assert!(dict.is_word("cat"));
    assert!(!dict.is_word("a"));
}

#[test]
fn test_is_word_requires_exact_match() {
    let dict = build_dictionary(get_test_words());
    assert!(!dict.is_word("catc"));
    assert!(!dict.is_word("catches"));
    assert!(!dict.is_word(""));
    assert!(!dict.is_word("q"));
}

#[test]
fn test_has_prefix() {
    let dict = build_dictionary(get_test_words());
    assert!(dict.has_prefix("c"));
    assert!(dict.has_prefix("ca"));
    assert!(dict.has_prefix("cat"));
    assert!(dict.has_prefix("catc"));
    assert!(dict.has_prefix("catch"));
    assert!(dict.has_prefix("zeb"));

    assert!(!dict.has_prefix("catchy"));
    assert!(!dict.has_prefix("cb"));
    assert!(!dict.has_prefix("x"));
    assert!(!dict.has_prefix("dox"));
}

#[test]
fn test_prefix_only_sees_retained_words() {
    // Both words are below the minimum length
    let dict = build_dictionary(["dog", "ant"]);
    assert!(!dict.has_prefix("d"));
    assert!(!dict.has_prefix("an"));
    assert!(dict.is_empty());
}

#[test]
fn test_empty_prefix() {
    assert!(build_dictionary(["word"]).has_prefix(""));
    assert!(!build_dictionary(Vec::<String>::new()).has_prefix(""));
}

#[test]
fn test_words_are_normalized_and_deduplicated() {
    let dict = build_dictionary(["  Cats ", "cats", "CATS\r", "dogs"]);
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.words(), vec!["cats", "dogs"]);
}

#[test]
fn test_parse_word_list() {
    let words = parse_word_list("apple\nBanana\r\n\n  cherry  \n");
    assert_eq!(words, vec!["apple", "banana", "cherry"]);
}

#[test]
fn test_load_word_list_from_file() {
    let path = std::env::temp_dir().join(format!("boggle-words-{}.txt", std::process::id()));
    std::fs::write(&path, "cats\ndogs\nox\n").unwrap();

    let words = boggle_solver::load_word_list(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(words, vec!["cats", "dogs", "ox"]);
    assert_eq!(build_dictionary(words).len(), 2);
}

#[test]
fn test_load_word_list_missing_file() {
    let result = boggle_solver::load_word_list("/definitely/not/here/words.txt");
    assert!(result.is_err());
}

#[test]
fn test_dictionary_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dictionary>();
}
