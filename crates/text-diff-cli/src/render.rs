//! Plain-text rendering of segments and candidates.

use text_diff::{DiffSegment, EditKind, RevertCandidate, RevertKind};

/// Render segments inline: deletions as `[-text-]`, insertions as `{+text+}`.
pub fn markup(segments: &[DiffSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment.kind {
            EditKind::Equal => out.push_str(&segment.text),
            EditKind::Delete => {
                out.push_str("[-");
                out.push_str(&segment.text);
                out.push_str("-]");
            }
            EditKind::Insert => {
                out.push_str("{+");
                out.push_str(&segment.text);
                out.push_str("+}");
            }
        }
    }
    out
}

/// One line per candidate: id, kind, updated byte range and the change.
pub fn candidate_lines(candidates: &[RevertCandidate]) -> String {
    candidates
        .iter()
        .map(|candidate| {
            let range = &candidate.updated_range;
            let original = candidate.original_fragment.as_deref().unwrap_or_default();
            let updated = candidate.updated_fragment.as_deref().unwrap_or_default();
            let change = match candidate.kind {
                RevertKind::SingleInsertion => format!("{{+{updated}+}}"),
                RevertKind::SingleDeletion => format!("[-{original}-]"),
                RevertKind::PairedReplacement => format!("[-{original}-]{{+{updated}+}}"),
            };
            format!(
                "{}\t{}\t{}..{}\t{}\n",
                candidate.id,
                kind_name(candidate.kind),
                range.start,
                range.end,
                change
            )
        })
        .collect()
}

fn kind_name(kind: RevertKind) -> &'static str {
    match kind {
        RevertKind::SingleInsertion => "insertion",
        RevertKind::SingleDeletion => "deletion",
        RevertKind::PairedReplacement => "replacement",
    }
}
