//! Revert candidates and actions.
//!
//! Maps a segment stream back onto the two source strings and derives independently undoable
//! changes from it:
//!
//! - [`candidates`] lists every change that can be reverted on its own;
//! - [`action`] materializes one candidate against a concrete updated text.
//!
//! All offsets are UTF-8 byte offsets, so ranges slice the source strings directly.
//!
//! Candidates are only meaningful for the exact `(segments, original, updated)` they were
//! computed from. After applying an action, recompute candidates from the new updated text
//! before applying another one.

use crate::segment::{ComparisonMode, DiffSegment, EditKind, TokenKind};
use crate::token;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// What kind of change a [`RevertCandidate`] undoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RevertKind {
    /// Text inserted in the updated version; reverting removes it.
    SingleInsertion,
    /// Text deleted from the original; reverting inserts it back.
    SingleDeletion,
    /// A deletion immediately followed by an insertion; reverting swaps the original back in.
    PairedReplacement,
}

/// One independently revertable change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RevertCandidate {
    /// Sequential id, unique within one [`candidates`] call only.
    pub id: usize,
    /// Kind of change.
    pub kind: RevertKind,
    /// Token kind of the restored text (the inserted text for insertions).
    pub token_kind: TokenKind,
    /// Indices of the segments this candidate was built from.
    pub segment_indices: Vec<usize>,
    /// Byte range of the change in the original text (empty for insertions).
    pub original_range: Range<usize>,
    /// Byte range in the updated text to replace (empty for deletions, possibly one separator
    /// wider than the fragment for insertions).
    pub updated_range: Range<usize>,
    /// Text that replaces `updated_range`.
    pub replacement_text: String,
    /// The text as it was in the original, if any.
    pub original_fragment: Option<String>,
    /// The text as it is in the updated version, if any.
    pub updated_fragment: Option<String>,
}

/// The result of applying a [`RevertCandidate`] to an updated text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RevertAction {
    /// Kind of change that was reverted.
    pub kind: RevertKind,
    /// Byte range of the updated text that was replaced.
    pub updated_range: Range<usize>,
    /// Text written over `updated_range`, including any added word-boundary spaces.
    pub replacement_text: String,
    /// The text as it was in the original, if any.
    pub original_fragment: Option<String>,
    /// The text as it was in the updated version, if any.
    pub updated_fragment: Option<String>,
    /// The updated text after the revert.
    pub resulting_updated: String,
}

/// A segment together with the byte ranges it occupies in both source strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IndexedSegment<'a> {
    pub(crate) index: usize,
    pub(crate) segment: &'a DiffSegment,
    pub(crate) original_range: Range<usize>,
    pub(crate) updated_range: Range<usize>,
}

/// Walk `segments` once, tracking a cursor into each source string.
///
/// Word and punctuation segments are located in the side(s) they belong to. Whitespace segments
/// only claim source text when it is exactly the whitespace at the cursor: whitespace kept
/// around a deletion is reported as `Equal` but only exists in the original, and the updated
/// side's whitespace wins in a changed run. Unclaimed whitespace is skipped before the next
/// word or punctuation on that side.
pub(crate) fn indexed_segments<'a>(
    segments: &'a [DiffSegment],
    original: &str,
    updated: &str,
) -> Vec<IndexedSegment<'a>> {
    let mut original_cursor = SourceCursor::new(original);
    let mut updated_cursor = SourceCursor::new(updated);

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let text = segment.text.as_str();
            let whitespace = segment.token_kind == TokenKind::Whitespace;
            let (original_range, updated_range) = match segment.kind {
                EditKind::Equal if whitespace => (
                    original_cursor.whitespace(text),
                    updated_cursor.whitespace(text),
                ),
                EditKind::Equal => (original_cursor.matching(text), updated_cursor.matching(text)),
                EditKind::Delete => (
                    original_cursor.take(text.len(), whitespace),
                    updated_cursor.here(),
                ),
                EditKind::Insert => (
                    original_cursor.here(),
                    updated_cursor.take(text.len(), whitespace),
                ),
            };

            IndexedSegment {
                index,
                segment,
                original_range,
                updated_range,
            }
        })
        .collect()
}

/// Byte position in one source string.
struct SourceCursor<'s> {
    source: &'s str,
    position: usize,
    /// Whitespace at `position` not claimed by any segment yet, once looked up.
    pending_whitespace: Option<usize>,
}

impl<'s> SourceCursor<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            position: 0,
            pending_whitespace: None,
        }
    }

    fn here(&self) -> Range<usize> {
        self.position..self.position
    }

    fn whitespace(&mut self, text: &str) -> Range<usize> {
        let pending = self
            .pending_whitespace
            .unwrap_or_else(|| self.whitespace_len());
        let start = self.position;

        if pending > 0
            && pending == text.len()
            && self.source.get(start..start + pending) == Some(text)
        {
            self.position += pending;
            self.pending_whitespace = Some(0);
            return start..self.position;
        }

        self.pending_whitespace = Some(pending);
        self.here()
    }

    /// Locate `text` at the cursor; does not move if the source does not spell it there.
    fn matching(&mut self, text: &str) -> Range<usize> {
        self.skip_whitespace();
        let rest = self.source.get(self.position..).unwrap_or_default();
        match spelled_len(rest, text) {
            Some(len) => {
                let start = self.position;
                self.position += len;
                start..self.position
            }
            None => self.here(),
        }
    }

    /// Text that exists only on this side, `len` bytes long.
    fn take(&mut self, len: usize, whitespace: bool) -> Range<usize> {
        if whitespace {
            self.pending_whitespace = None;
        } else {
            self.skip_whitespace();
        }
        let start = self.position;
        self.position += len;
        start..self.position
    }

    fn skip_whitespace(&mut self) {
        let pending = self
            .pending_whitespace
            .take()
            .unwrap_or_else(|| self.whitespace_len());
        self.position += pending;
    }

    fn whitespace_len(&self) -> usize {
        self.source
            .get(self.position..)
            .map_or(0, token::leading_whitespace_len)
    }
}

/// Byte length of the prefix of `source` that spells `text`.
///
/// Whitespace in `source` that `text` lacks is skipped: merged `Equal` runs can span a
/// whitespace run that was dropped from the segments.
fn spelled_len(source: &str, text: &str) -> Option<usize> {
    let mut chars = source.char_indices();
    for expected in text.chars() {
        loop {
            let (_, actual) = chars.next()?;
            if actual == expected {
                break;
            }
            if !actual.is_whitespace() {
                return None;
            }
        }
    }
    Some(chars.offset())
}

/// List the revertable changes in `segments`.
///
/// Returns an empty list unless `mode` is [`ComparisonMode::Token`]: character-refined
/// segments are too fine-grained to undo individually.
///
/// An insertion that sits between two whitespace characters also covers one of them, so
/// reverting `"A X B"` gives back `"A B"`.
///
/// # Example
///
/// ```rust
/// use text_diff::{ComparisonMode, RevertKind, candidates, compute_segments};
///
/// let segments = compute_segments("old", "new", ComparisonMode::Token);
/// let found = candidates(&segments, ComparisonMode::Token, "old", "new");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].kind, RevertKind::PairedReplacement);
/// assert_eq!(found[0].replacement_text, "old");
/// ```
pub fn candidates(
    segments: &[DiffSegment],
    mode: ComparisonMode,
    original: &str,
    updated: &str,
) -> Vec<RevertCandidate> {
    if mode != ComparisonMode::Token {
        return Vec::new();
    }

    let indexed = indexed_segments(segments, original, updated);
    let mut output = Vec::new();

    let mut position = 0;
    while position < indexed.len() {
        let current = &indexed[position];
        let id = output.len();

        if let Some(next) = indexed.get(position + 1)
            && current.segment.kind == EditKind::Delete
            && next.segment.kind == EditKind::Insert
            && current.segment.is_lexical_change()
            && next.segment.is_lexical_change()
        {
            output.push(RevertCandidate {
                id,
                kind: RevertKind::PairedReplacement,
                token_kind: current.segment.token_kind,
                segment_indices: vec![current.index, next.index],
                original_range: current.original_range.clone(),
                updated_range: next.updated_range.clone(),
                replacement_text: current.segment.text.clone(),
                original_fragment: Some(current.segment.text.clone()),
                updated_fragment: Some(next.segment.text.clone()),
            });
            position += 2;
            continue;
        }

        if current.segment.is_lexical_change() {
            match current.segment.kind {
                EditKind::Insert => output.push(RevertCandidate {
                    id,
                    kind: RevertKind::SingleInsertion,
                    token_kind: current.segment.token_kind,
                    segment_indices: vec![current.index],
                    original_range: current.original_range.clone(),
                    updated_range: absorb_separator(updated, current.updated_range.clone()),
                    replacement_text: String::new(),
                    original_fragment: None,
                    updated_fragment: Some(current.segment.text.clone()),
                }),
                EditKind::Delete => output.push(RevertCandidate {
                    id,
                    kind: RevertKind::SingleDeletion,
                    token_kind: current.segment.token_kind,
                    segment_indices: vec![current.index],
                    original_range: current.original_range.clone(),
                    updated_range: current.updated_range.start..current.updated_range.start,
                    replacement_text: current.segment.text.clone(),
                    original_fragment: Some(current.segment.text.clone()),
                    updated_fragment: None,
                }),
                EditKind::Equal => {}
            }
        }

        position += 1;
    }

    tracing::debug!(
        segments = segments.len(),
        candidates = output.len(),
        "resolved revert candidates"
    );
    output
}

/// Widen an insertion's range over one of the whitespace characters around it when it sits
/// between two, so removing it leaves a single separator. Line breaks are kept.
fn absorb_separator(updated: &str, range: Range<usize>) -> Range<usize> {
    let previous = updated
        .get(..range.start)
        .and_then(|before| before.chars().next_back());
    let next = updated
        .get(range.end..)
        .and_then(|after| after.chars().next());
    let (Some(previous), Some(next)) = (previous, next) else {
        return range;
    };
    if !previous.is_whitespace() || !next.is_whitespace() {
        return range;
    }

    if !is_line_break(next) {
        range.start..range.end + next.len_utf8()
    } else if !is_line_break(previous) {
        range.start - previous.len_utf8()..range.end
    } else {
        range
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Apply `candidate` to `updated`, returning the reverted text.
///
/// Returns `None` if the candidate's range does not fit `updated` (for example because it was
/// computed against an older version of the text).
///
/// Reinserting a deleted word adds a space on each side where it would otherwise touch an
/// alphanumeric neighbour, so `"Hello world"` reverts to `"Hello brave world"` rather than
/// `"Hello braveworld"`.
///
/// # Example
///
/// ```rust
/// use text_diff::{ComparisonMode, action, candidates, compute_segments};
///
/// let (original, updated) = ("Hello brave world", "Hello world");
/// let segments = compute_segments(original, updated, ComparisonMode::Token);
/// let found = candidates(&segments, ComparisonMode::Token, original, updated);
///
/// let reverted = action(&found[0], updated).unwrap();
/// assert_eq!(reverted.resulting_updated, original);
/// ```
pub fn action(candidate: &RevertCandidate, updated: &str) -> Option<RevertAction> {
    let mut range = candidate.updated_range.clone();
    if candidate.kind == RevertKind::SingleDeletion && range.start > updated.len() {
        range = updated.len()..updated.len();
    }

    let fits = range.start <= range.end
        && range.end <= updated.len()
        && updated.is_char_boundary(range.start)
        && updated.is_char_boundary(range.end);
    if !fits {
        tracing::debug!(
            id = candidate.id,
            start = range.start,
            end = range.end,
            len = updated.len(),
            "revert candidate does not fit updated text"
        );
        return None;
    }

    let replacement_text = if needs_word_spacing(candidate) {
        with_word_spacing(&candidate.replacement_text, updated, range.start)
    } else {
        candidate.replacement_text.clone()
    };

    let mut resulting_updated = String::with_capacity(
        updated.len() - (range.end - range.start) + replacement_text.len(),
    );
    resulting_updated.push_str(&updated[..range.start]);
    resulting_updated.push_str(&replacement_text);
    resulting_updated.push_str(&updated[range.end..]);

    Some(RevertAction {
        kind: candidate.kind,
        updated_range: range,
        replacement_text,
        original_fragment: candidate.original_fragment.clone(),
        updated_fragment: candidate.updated_fragment.clone(),
        resulting_updated,
    })
}

fn needs_word_spacing(candidate: &RevertCandidate) -> bool {
    candidate.kind == RevertKind::SingleDeletion
        && candidate.token_kind == TokenKind::Word
        && candidate.replacement_text.chars().any(char::is_alphanumeric)
}

fn with_word_spacing(text: &str, updated: &str, at: usize) -> String {
    let before = updated[..at].chars().next_back();
    let after = updated[at..].chars().next();

    let leading =
        !text.starts_with(char::is_whitespace) && before.is_some_and(char::is_alphanumeric);
    let trailing =
        !text.ends_with(char::is_whitespace) && after.is_some_and(char::is_alphanumeric);

    let mut spaced = String::with_capacity(text.len() + 2);
    if leading {
        spaced.push(' ');
    }
    spaced.push_str(text);
    if trailing {
        spaced.push(' ');
    }
    spaced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(kind: EditKind, token_kind: TokenKind, text: &str) -> DiffSegment {
        DiffSegment::new(kind, token_kind, text)
    }

    #[test]
    fn test_indexed_segments_track_both_cursors() {
        let segments = vec![
            segment(EditKind::Equal, TokenKind::Word, "a"),
            segment(EditKind::Delete, TokenKind::Word, "bb"),
            segment(EditKind::Insert, TokenKind::Word, "ccc"),
            segment(EditKind::Equal, TokenKind::Word, "d"),
        ];
        let indexed = indexed_segments(&segments, "abbd", "acccd");

        let ranges: Vec<_> = indexed
            .iter()
            .map(|s| (s.original_range.clone(), s.updated_range.clone()))
            .collect();
        assert_eq!(
            ranges,
            vec![(0..1, 0..1), (1..3, 1..1), (3..3, 1..4), (3..4, 4..5)]
        );
    }

    #[test]
    fn test_equal_segment_missing_from_one_side_does_not_advance_it() {
        // The space after "brave" is kept for display but no longer exists in the update.
        let segments = vec![
            segment(EditKind::Equal, TokenKind::Word, "Hello"),
            segment(EditKind::Equal, TokenKind::Whitespace, " "),
            segment(EditKind::Delete, TokenKind::Word, "brave"),
            segment(EditKind::Equal, TokenKind::Whitespace, " "),
            segment(EditKind::Equal, TokenKind::Word, "world"),
        ];
        let indexed = indexed_segments(&segments, "Hello brave world", "Hello world");

        assert_eq!(indexed[3].original_range, 11..12);
        assert_eq!(indexed[3].updated_range, 6..6);
        assert_eq!(indexed[4].original_range, 12..17);
        assert_eq!(indexed[4].updated_range, 6..11);
    }

    #[test]
    fn test_equal_segment_mismatch_never_slices_inside_a_char() {
        let segments = vec![segment(EditKind::Equal, TokenKind::Word, "a")];
        let indexed = indexed_segments(&segments, "é", "é");
        assert_eq!(indexed[0].original_range, 0..0);
        assert_eq!(indexed[0].updated_range, 0..0);
    }

    #[test]
    fn test_deleted_whitespace_does_not_claim_updated_whitespace() {
        let segments = vec![
            segment(EditKind::Equal, TokenKind::Whitespace, " "),
            segment(EditKind::Delete, TokenKind::Punctuation, ","),
            segment(EditKind::Equal, TokenKind::Whitespace, "  "),
            segment(EditKind::Insert, TokenKind::Word, "a"),
        ];
        let indexed = indexed_segments(&segments, " ,", "  a");

        let ranges: Vec<_> = indexed
            .iter()
            .map(|s| (s.original_range.clone(), s.updated_range.clone()))
            .collect();
        assert_eq!(
            ranges,
            vec![(0..1, 0..0), (1..2, 0..0), (2..2, 0..2), (2..2, 2..3)]
        );
    }

    #[test]
    fn test_dropped_whitespace_inside_merged_equal_run() {
        // "日 本" -> "日本": the deleted space is dropped and both words merge into one segment.
        let segments = vec![
            segment(EditKind::Equal, TokenKind::Word, "日本"),
            segment(EditKind::Delete, TokenKind::Word, "x"),
        ];
        let indexed = indexed_segments(&segments, "日 本x", "日本");

        assert_eq!(indexed[0].original_range, 0..7);
        assert_eq!(indexed[0].updated_range, 0..6);
        assert_eq!(indexed[1].original_range, 7..8);
        assert_eq!(indexed[1].updated_range, 6..6);
    }

    #[test]
    fn test_unclaimed_whitespace_is_skipped_before_words() {
        // The space of "in app" was dropped as formatting noise.
        let segments = vec![
            segment(EditKind::Equal, TokenKind::Word, "in"),
            segment(EditKind::Insert, TokenKind::Punctuation, "-"),
            segment(EditKind::Equal, TokenKind::Word, "app"),
        ];
        let indexed = indexed_segments(&segments, "in app", "in-app");

        assert_eq!(indexed[1].updated_range, 2..3);
        assert_eq!(indexed[2].original_range, 3..6);
        assert_eq!(indexed[2].updated_range, 3..6);
    }

    #[test]
    fn test_spelled_len() {
        assert_eq!(spelled_len("abc", "ab"), Some(2));
        assert_eq!(spelled_len("a b", "ab"), Some(3));
        assert_eq!(spelled_len("ab", "ac"), None);
        assert_eq!(spelled_len("a", "ab"), None);
        assert_eq!(spelled_len("é", "a"), None);
        assert_eq!(spelled_len("", ""), Some(0));
    }

    #[test]
    fn test_absorb_separator() {
        assert_eq!(absorb_separator("A X B", 2..3), 2..4);
        assert_eq!(absorb_separator("A X\nB", 2..3), 1..3);
        assert_eq!(absorb_separator("A\nX\nB", 2..3), 2..3);
        assert_eq!(absorb_separator("AX B", 1..2), 1..2);
        assert_eq!(absorb_separator("A X", 2..3), 2..3);
        assert_eq!(absorb_separator("a ß\u{3000}b", 2..4), 2..7);
    }

    #[test]
    fn test_with_word_spacing() {
        assert_eq!(with_word_spacing("brave", "Hello world", 6), "brave ");
        assert_eq!(with_word_spacing("brave", "Hello", 5), " brave");
        assert_eq!(with_word_spacing("brave", "ab", 1), " brave ");
        assert_eq!(with_word_spacing(" brave", "ab", 1), " brave ");
        assert_eq!(with_word_spacing("brave", "", 0), "brave");
        assert_eq!(with_word_spacing("brave", "(x)", 1), "brave ");
    }
}
