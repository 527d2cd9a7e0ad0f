//! Public diff data model.
//!
//! A diff is reported as an ordered list of [`DiffSegment`]s. Each segment is a run of text
//! tagged with an [`EditKind`] (was it kept, removed or added) and a [`TokenKind`] (what kind of
//! text it is). Consumers such as renderers or interaction layers only ever see these types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The lexical category of a token or segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// A natural-language word (a UAX #29 word containing an alphanumeric character).
    Word,
    /// A run of non-whitespace characters outside any word.
    Punctuation,
    /// A run of whitespace characters, including newlines.
    Whitespace,
}

impl TokenKind {
    /// Returns `true` for words and punctuation.
    pub fn is_lexical(self) -> bool {
        self != TokenKind::Whitespace
    }
}

/// The edit operation attached to an operation or segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EditKind {
    /// Present in both the original and the updated text.
    Equal,
    /// Present only in the original text.
    Delete,
    /// Present only in the updated text.
    Insert,
}

/// Granularity used when computing segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComparisonMode {
    /// Compare at token granularity.
    #[default]
    Token,
    /// Additionally refine adjacent word replacements at character granularity.
    Character,
}

/// A contiguous run of text tagged with an edit kind and a token kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffSegment {
    /// Edit operation represented by this segment.
    pub kind: EditKind,
    /// Lexical category of `text`.
    pub token_kind: TokenKind,
    /// Segment text.
    pub text: String,
}

impl DiffSegment {
    /// Create a segment.
    pub fn new(kind: EditKind, token_kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            token_kind,
            text: text.into(),
        }
    }

    /// Returns `true` for changed (non-equal) words and punctuation.
    pub fn is_lexical_change(&self) -> bool {
        self.kind != EditKind::Equal && self.token_kind.is_lexical()
    }

    /// Returns `true` if the segment occupies text in the original document.
    pub fn in_original(&self) -> bool {
        self.kind != EditKind::Insert
    }

    /// Returns `true` if the segment occupies text in the updated document.
    pub fn in_updated(&self) -> bool {
        self.kind != EditKind::Delete
    }
}
