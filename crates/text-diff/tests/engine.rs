use pretty_assertions::assert_eq;
use text_diff::{ComparisonMode, DiffSegment, EditKind, TokenKind, compute_segments};

fn token_diff(original: &str, updated: &str) -> Vec<DiffSegment> {
    compute_segments(original, updated, ComparisonMode::Token)
}

fn character_diff(original: &str, updated: &str) -> Vec<DiffSegment> {
    compute_segments(original, updated, ComparisonMode::Character)
}

fn joined(segments: &[DiffSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

fn equal(token_kind: TokenKind, text: &str) -> DiffSegment {
    DiffSegment::new(EditKind::Equal, token_kind, text)
}

fn delete(token_kind: TokenKind, text: &str) -> DiffSegment {
    DiffSegment::new(EditKind::Delete, token_kind, text)
}

fn insert(token_kind: TokenKind, text: &str) -> DiffSegment {
    DiffSegment::new(EditKind::Insert, token_kind, text)
}

#[test]
fn test_equal_text_produces_only_equal_segments() {
    let original = "Hello, world!";
    let segments = token_diff(original, original);

    assert!(segments.iter().all(|s| s.kind == EditKind::Equal));
    assert_eq!(joined(&segments), original);
}

#[test]
fn test_empty_inputs() {
    assert!(token_diff("", "").is_empty());
    assert_eq!(
        token_diff("", "new text"),
        vec![
            insert(TokenKind::Word, "new"),
            equal(TokenKind::Whitespace, " "),
            insert(TokenKind::Word, "text"),
        ]
    );
}

#[test]
fn test_all_deleted_keeps_spacing_between_removed_words() {
    assert_eq!(
        token_diff("old text", ""),
        vec![
            delete(TokenKind::Word, "old"),
            equal(TokenKind::Whitespace, " "),
            delete(TokenKind::Word, "text"),
        ]
    );
}

#[test]
fn test_insertion_creates_insert_word_segment() {
    assert_eq!(
        token_diff("Hello world", "Hello brave world"),
        vec![
            equal(TokenKind::Word, "Hello"),
            equal(TokenKind::Whitespace, " "),
            insert(TokenKind::Word, "brave"),
            equal(TokenKind::Whitespace, " "),
            equal(TokenKind::Word, "world"),
        ]
    );
}

#[test]
fn test_deletion_creates_delete_word_segment() {
    let segments = token_diff("Hello brave world", "Hello world");

    assert_eq!(
        segments,
        vec![
            equal(TokenKind::Word, "Hello"),
            equal(TokenKind::Whitespace, " "),
            delete(TokenKind::Word, "brave"),
            equal(TokenKind::Whitespace, " "),
            equal(TokenKind::Word, "world"),
        ]
    );
    assert_eq!(joined(&segments), "Hello brave world");
}

#[test]
fn test_replacement_renders_delete_then_insert() {
    let segments = token_diff("old value", "new value");

    assert_eq!(
        segments,
        vec![
            delete(TokenKind::Word, "old"),
            insert(TokenKind::Word, "new"),
            equal(TokenKind::Whitespace, " "),
            equal(TokenKind::Word, "value"),
        ]
    );
    assert_eq!(joined(&segments), "oldnew value");
}

#[test]
fn test_punctuation_edits_are_lexical_segments() {
    let segments = token_diff("Hello, world!", "Hello. world?");

    assert_eq!(
        segments,
        vec![
            equal(TokenKind::Word, "Hello"),
            delete(TokenKind::Punctuation, ","),
            insert(TokenKind::Punctuation, "."),
            equal(TokenKind::Whitespace, " "),
            equal(TokenKind::Word, "world"),
            delete(TokenKind::Punctuation, "!"),
            insert(TokenKind::Punctuation, "?"),
        ]
    );
    assert_eq!(joined(&segments), "Hello,. world!?");
}

#[test]
fn test_whitespace_only_changes_follow_updated_layout() {
    let updated = "Hello world\n";
    let segments = token_diff("Hello   world", updated);

    assert_eq!(
        segments,
        vec![
            equal(TokenKind::Word, "Hello"),
            equal(TokenKind::Whitespace, " "),
            equal(TokenKind::Word, "world"),
            equal(TokenKind::Whitespace, "\n"),
        ]
    );
    assert_eq!(joined(&segments), updated);
}

#[test]
fn test_deleted_whitespace_without_deleted_neighbour_is_dropped() {
    // The space is replaced by a hyphen: neither neighbouring lexical token was deleted.
    assert_eq!(
        token_diff("in app", "in-app"),
        vec![
            equal(TokenKind::Word, "in"),
            insert(TokenKind::Punctuation, "-"),
            equal(TokenKind::Word, "app"),
        ]
    );
}

#[test]
fn test_repeated_token_deletes_the_second_copy() {
    let segments = token_diff("A A B", "A B");

    assert_eq!(
        segments,
        vec![
            equal(TokenKind::Word, "A"),
            equal(TokenKind::Whitespace, " "),
            delete(TokenKind::Word, "A"),
            equal(TokenKind::Whitespace, " "),
            equal(TokenKind::Word, "B"),
        ]
    );
    assert_eq!(joined(&segments), "A A B");
}

#[test]
fn test_multiline_input_preserves_newlines_and_insertions() {
    let updated = "line1\nlineX\nline2";
    let segments = token_diff("line1\nline2", updated);

    assert_eq!(joined(&segments), updated);
    assert!(segments.contains(&insert(TokenKind::Word, "lineX")));
}

#[test]
fn test_multilingual_input() {
    let updated = "Привет, мир!";
    let segments = token_diff("Привет мир", updated);

    assert_eq!(joined(&segments), updated);
    assert!(segments.contains(&insert(TokenKind::Punctuation, ",")));
    assert!(segments.contains(&insert(TokenKind::Punctuation, "!")));
}

#[test]
fn test_adjacent_cjk_word_deletions_merge() {
    let segments = token_diff("日本語", "");
    assert_eq!(segments, vec![delete(TokenKind::Word, "日本語")]);
}

#[test]
fn test_default_mode_is_token() {
    assert_eq!(ComparisonMode::default(), ComparisonMode::Token);
    assert_eq!(
        compute_segments("Add a diff", "Added a diff", ComparisonMode::default()),
        token_diff("Add a diff", "Added a diff")
    );
}

#[test]
fn test_character_mode_refines_word_suffix_insertion() {
    assert_eq!(
        character_diff("Add", "Added"),
        vec![equal(TokenKind::Word, "Add"), insert(TokenKind::Word, "ed")]
    );
}

#[test]
fn test_character_mode_refines_word_middle_substitution() {
    assert_eq!(
        character_diff("cat", "cut"),
        vec![
            equal(TokenKind::Word, "c"),
            delete(TokenKind::Word, "a"),
            insert(TokenKind::Word, "u"),
            equal(TokenKind::Word, "t"),
        ]
    );
}

#[test]
fn test_character_mode_keeps_unrelated_words_as_delete_and_insert() {
    let segments = character_diff("brown", "sky");

    assert!(segments.iter().any(|s| s.kind == EditKind::Delete));
    assert!(segments.iter().any(|s| s.kind == EditKind::Insert));
    assert!(!segments.iter().any(|s| s.kind == EditKind::Equal));
}

#[test]
fn test_character_mode_does_not_refine_punctuation() {
    assert_eq!(
        character_diff("dog.", "dog!"),
        vec![
            equal(TokenKind::Word, "dog"),
            delete(TokenKind::Punctuation, "."),
            insert(TokenKind::Punctuation, "!"),
        ]
    );
}

#[test]
fn test_character_mode_preserves_whitespace_behaviour() {
    let updated = "Hello world\n";
    let segments = character_diff("Hello   world", updated);

    assert_eq!(joined(&segments), updated);
    assert!(
        segments
            .iter()
            .filter(|s| s.token_kind == TokenKind::Whitespace)
            .all(|s| s.kind == EditKind::Equal)
    );
}

#[test]
fn test_character_mode_handles_composed_characters() {
    assert_eq!(
        character_diff("naïve", "naïves"),
        vec![equal(TokenKind::Word, "naïve"), insert(TokenKind::Word, "s")]
    );

    // Decomposed: "i" + combining diaeresis is compared as one cluster.
    assert_eq!(
        character_diff("nai\u{308}ve", "nai\u{308}ves"),
        vec![
            equal(TokenKind::Word, "nai\u{308}ve"),
            insert(TokenKind::Word, "s"),
        ]
    );
}

#[test]
fn test_character_mode_repeated_character_tie_is_deterministic() {
    let first = character_diff("aaaa", "aa");
    let second = character_diff("aaaa", "aa");

    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![equal(TokenKind::Word, "aa"), delete(TokenKind::Word, "aa")]
    );
}

#[test]
fn test_character_mode_refines_within_sentence() {
    let segments = character_diff("the cat sat", "the cut sat");
    assert_eq!(
        segments,
        vec![
            equal(TokenKind::Word, "the"),
            equal(TokenKind::Whitespace, " "),
            equal(TokenKind::Word, "c"),
            delete(TokenKind::Word, "a"),
            insert(TokenKind::Word, "u"),
            equal(TokenKind::Word, "t"),
            equal(TokenKind::Whitespace, " "),
            equal(TokenKind::Word, "sat"),
        ]
    );
}
