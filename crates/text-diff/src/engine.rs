//! Segment computation.
//!
//! [`compute_segments`] turns a raw token edit script into display-ready [`DiffSegment`]s:
//!
//! 1. both texts are tokenized and diffed at token granularity;
//! 2. whitespace runs are collapsed (see below);
//! 3. words and punctuation map one-to-one onto segments;
//! 4. in [`ComparisonMode::Character`], every deleted word immediately followed by an inserted
//!    word is re-diffed grapheme by grapheme;
//! 5. adjacent segments with the same edit kind and token kind are merged.
//!
//! # Whitespace policy
//!
//! Whitespace never shows up as a change. A run of whitespace operations becomes one `Equal`
//! segment holding the whitespace that survives in the updated text. A run that was deleted
//! entirely is kept (as `Equal`) only when the nearest word or punctuation before or after it
//! was deleted too, so removed words keep their spacing; otherwise the run is dropped.

use crate::edit_script::{self, Operation};
use crate::segment::{ComparisonMode, DiffSegment, EditKind, TokenKind};
use crate::token::{self, Token};

/// Compute the diff of `original` → `updated` as a list of segments.
///
/// # Example
///
/// ```rust
/// use text_diff::{ComparisonMode, DiffSegment, EditKind, TokenKind, compute_segments};
///
/// let segments = compute_segments("Hello world", "Hello brave world", ComparisonMode::Token);
/// assert!(segments.contains(&DiffSegment::new(EditKind::Insert, TokenKind::Word, "brave")));
/// ```
pub fn compute_segments(original: &str, updated: &str, mode: ComparisonMode) -> Vec<DiffSegment> {
    let original_tokens = token::tokenize(original);
    let updated_tokens = token::tokenize(updated);
    let operations = edit_script::diff(&original_tokens, &updated_tokens);

    let segments = token_segments(&operations);
    let segments = match mode {
        ComparisonMode::Token => segments,
        ComparisonMode::Character => refine_word_replacements(segments),
    };
    let merged = merge_adjacent(segments);

    tracing::debug!(
        ?mode,
        original_tokens = original_tokens.len(),
        updated_tokens = updated_tokens.len(),
        operations = operations.len(),
        segments = merged.len(),
        "computed diff segments"
    );
    merged
}

fn token_segments(operations: &[Operation<Token>]) -> Vec<DiffSegment> {
    let mut segments = Vec::with_capacity(operations.len());

    let mut index = 0;
    while index < operations.len() {
        let operation = &operations[index];

        if operation.item.kind != TokenKind::Whitespace {
            segments.push(DiffSegment::new(
                operation.kind,
                operation.item.kind,
                operation.item.text.clone(),
            ));
            index += 1;
            continue;
        }

        let run_start = index;
        let mut run_end = index;
        while run_end < operations.len() && operations[run_end].item.kind == TokenKind::Whitespace
        {
            run_end += 1;
        }
        let run = &operations[run_start..run_end];

        let surviving: String = run
            .iter()
            .filter(|op| op.kind != EditKind::Delete)
            .map(|op| op.item.text.as_str())
            .collect();

        if !surviving.is_empty() {
            segments.push(DiffSegment::new(
                EditKind::Equal,
                TokenKind::Whitespace,
                surviving,
            ));
        } else if is_adjacent_to_deleted_lexical(operations, run_start, run_end) {
            let deleted: String = run.iter().map(|op| op.item.text.as_str()).collect();
            tracing::trace!(run_start, run_end, "kept deleted whitespace run");
            segments.push(DiffSegment::new(EditKind::Equal, TokenKind::Whitespace, deleted));
        } else {
            tracing::trace!(run_start, run_end, "dropped deleted whitespace run");
        }

        index = run_end;
    }

    segments
}

fn is_adjacent_to_deleted_lexical(
    operations: &[Operation<Token>],
    run_start: usize,
    run_end: usize,
) -> bool {
    let is_lexical = |op: &&Operation<Token>| op.item.kind.is_lexical();

    let previous = operations[..run_start].iter().rev().find(is_lexical);
    let next = operations[run_end..].iter().find(is_lexical);

    [previous, next]
        .into_iter()
        .flatten()
        .any(|op| op.kind == EditKind::Delete)
}

fn refine_word_replacements(segments: Vec<DiffSegment>) -> Vec<DiffSegment> {
    let mut refined = Vec::with_capacity(segments.len());

    let mut index = 0;
    while index < segments.len() {
        if let Some(next) = segments.get(index + 1)
            && let Some(replacement) = refine_pair(&segments[index], next)
        {
            refined.extend(replacement);
            index += 2;
            continue;
        }

        refined.push(segments[index].clone());
        index += 1;
    }

    refined
}

fn refine_pair(delete: &DiffSegment, insert: &DiffSegment) -> Option<Vec<DiffSegment>> {
    let is_pair = delete.kind == EditKind::Delete
        && insert.kind == EditKind::Insert
        && delete.token_kind == TokenKind::Word
        && insert.token_kind == TokenKind::Word;
    if !is_pair {
        return None;
    }

    let original = token::graphemes(&delete.text);
    let updated = token::graphemes(&insert.text);
    let segments = edit_script::diff(&original, &updated)
        .into_iter()
        .map(|op| DiffSegment::new(op.kind, TokenKind::Word, op.item.text))
        .collect();

    Some(segments)
}

fn merge_adjacent(segments: Vec<DiffSegment>) -> Vec<DiffSegment> {
    let mut merged: Vec<DiffSegment> = Vec::with_capacity(segments.len());

    for segment in segments.into_iter().filter(|s| !s.text.is_empty()) {
        if let Some(last) = merged.last_mut()
            && last.kind == segment.kind
            && last.token_kind == segment.token_kind
        {
            last.text.push_str(&segment.text);
            continue;
        }
        merged.push(segment);
    }

    merged
}
