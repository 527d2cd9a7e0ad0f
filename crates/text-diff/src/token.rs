//! Plain-text tokenizer.
//!
//! Splits text into [`Token`]s classified as words, punctuation or whitespace. Word boundaries
//! follow UAX #29 (via `unicode-segmentation`), so scripts without spaces and numbers such as
//! `3.14` are handled the way the Unicode word-break rules handle them. Everything between two
//! words is classified one extended grapheme cluster at a time, which keeps combining marks and
//! emoji sequences inside a single token.
//!
//! The concatenation of all token texts is always exactly the input.

use crate::segment::TokenKind;
use unicode_segmentation::UnicodeSegmentation;

/// A classified run of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Lexical category.
    pub kind: TokenKind,
    /// Token text, a slice of the tokenized input.
    pub text: String,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Split `text` into word, punctuation and whitespace tokens.
///
/// # Example
///
/// ```rust
/// use text_diff::{TokenKind, tokenize};
///
/// let tokens = tokenize("Hi,  you");
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Word, TokenKind::Punctuation, TokenKind::Whitespace, TokenKind::Word]
/// );
/// assert_eq!(tokens[2].text, "  ");
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut cursor = 0;

    for (start, piece) in text.split_word_bound_indices() {
        if !is_word(piece) {
            continue;
        }
        if cursor < start {
            push_gap_tokens(&text[cursor..start], &mut tokens);
        }
        tokens.push(Token::new(TokenKind::Word, piece));
        cursor = start + piece.len();
    }

    if cursor < text.len() {
        push_gap_tokens(&text[cursor..], &mut tokens);
    }

    tokens
}

/// Split `text` into one [`TokenKind::Word`] token per extended grapheme cluster.
///
/// This is the "character" unit used when refining word replacements, so a base letter and its
/// combining marks are compared as one item.
pub fn graphemes(text: &str) -> Vec<Token> {
    text.graphemes(true)
        .map(|g| Token::new(TokenKind::Word, g))
        .collect()
}

/// Byte length of the whitespace run at the start of `text`, in whole grapheme clusters.
pub(crate) fn leading_whitespace_len(text: &str) -> usize {
    text.grapheme_indices(true)
        .find(|(_, grapheme)| gap_kind(grapheme) != TokenKind::Whitespace)
        .map_or(text.len(), |(offset, _)| offset)
}

// Same rule as `UnicodeSegmentation::unicode_words`.
fn is_word(piece: &str) -> bool {
    piece.chars().any(char::is_alphanumeric)
}

fn gap_kind(grapheme: &str) -> TokenKind {
    if grapheme.chars().all(char::is_whitespace) {
        TokenKind::Whitespace
    } else {
        TokenKind::Punctuation
    }
}

fn push_gap_tokens(gap: &str, tokens: &mut Vec<Token>) {
    let mut clusters = gap.grapheme_indices(true);
    let Some((_, first)) = clusters.next() else {
        return;
    };

    let mut run_start = 0;
    let mut run_kind = gap_kind(first);

    for (offset, grapheme) in clusters {
        let kind = gap_kind(grapheme);
        if kind != run_kind {
            tokens.push(Token::new(run_kind, &gap[run_start..offset]));
            run_start = offset;
            run_kind = kind;
        }
    }

    tokens.push(Token::new(run_kind, &gap[run_start..]));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap(text: &str) -> Vec<(TokenKind, String)> {
        let mut tokens = Vec::new();
        push_gap_tokens(text, &mut tokens);
        tokens.into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_gap_splits_on_class_switch() {
        assert_eq!(
            gap(",  "),
            vec![
                (TokenKind::Punctuation, ",".to_string()),
                (TokenKind::Whitespace, "  ".to_string()),
            ]
        );
    }

    #[test]
    fn test_gap_keeps_crlf_as_whitespace() {
        assert_eq!(gap("\r\n"), vec![(TokenKind::Whitespace, "\r\n".to_string())]);
    }

    #[test]
    fn test_gap_empty() {
        assert!(gap("").is_empty());
    }

    #[test]
    fn test_leading_whitespace_len() {
        assert_eq!(leading_whitespace_len("  a b"), 2);
        assert_eq!(leading_whitespace_len("\r\nx"), 2);
        assert_eq!(leading_whitespace_len("a "), 0);
        assert_eq!(leading_whitespace_len(" \t"), 2);
        assert_eq!(leading_whitespace_len(""), 0);
        // A space carrying a combining mark is punctuation, not whitespace.
        assert_eq!(leading_whitespace_len(" \u{301}"), 0);
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("hello"));
        assert!(is_word("42"));
        assert!(is_word("мир"));
        assert!(!is_word("..."));
        assert!(!is_word(" "));
    }
}
