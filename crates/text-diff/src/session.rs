//! Diff session
//!
//! Holds one `(original, updated, mode)` triple together with its segments, recomputing only
//! when an input actually changes. Frontends that re-render often can call
//! [`DiffSession::update_if_needed`] on every pass without paying for a new diff.
//!
//! The session also drives sequential reverts: [`DiffSession::revert`] applies one candidate to
//! the updated text and recomputes, so the next call sees fresh candidates.
//!
//! # Example
//!
//! ```rust
//! use text_diff::{ComparisonMode, DiffSession, RevertKind};
//!
//! let mut session = DiffSession::new("a quick fox", "a slow fox", ComparisonMode::Token);
//! let pair = session
//!     .candidates()
//!     .into_iter()
//!     .find(|c| c.kind == RevertKind::PairedReplacement)
//!     .unwrap();
//!
//! session.revert(pair.id).unwrap();
//! assert_eq!(session.updated(), "a quick fox");
//! assert!(session.candidates().is_empty());
//! ```

use crate::engine::compute_segments;
use crate::error::RevertError;
use crate::revert::{self, RevertAction, RevertCandidate};
use crate::segment::{ComparisonMode, DiffSegment};
use std::fmt;

/// Computes segments for a diff session.
pub type SegmentProvider =
    Box<dyn Fn(&str, &str, ComparisonMode) -> Vec<DiffSegment> + Send + Sync>;

/// A diff of two texts that is kept up to date as its inputs change.
pub struct DiffSession {
    original: String,
    updated: String,
    mode: ComparisonMode,
    segments: Vec<DiffSegment>,
    version: u64,
    provider: SegmentProvider,
}

impl DiffSession {
    /// Create a session backed by [`compute_segments`].
    pub fn new(
        original: impl Into<String>,
        updated: impl Into<String>,
        mode: ComparisonMode,
    ) -> Self {
        Self::with_provider(original, updated, mode, compute_segments)
    }

    /// Create a session backed by a custom segment provider.
    ///
    /// The provider is called once here and then only when an input changes.
    pub fn with_provider<F>(
        original: impl Into<String>,
        updated: impl Into<String>,
        mode: ComparisonMode,
        provider: F,
    ) -> Self
    where
        F: Fn(&str, &str, ComparisonMode) -> Vec<DiffSegment> + Send + Sync + 'static,
    {
        let original = original.into();
        let updated = updated.into();
        let segments = provider(&original, &updated, mode);
        Self {
            original,
            updated,
            mode,
            segments,
            version: 0,
            provider: Box::new(provider),
        }
    }

    /// Recompute segments if any input differs from the current one.
    ///
    /// Returns `true` if the segments were recomputed.
    pub fn update_if_needed(
        &mut self,
        original: &str,
        updated: &str,
        mode: ComparisonMode,
    ) -> bool {
        if original == self.original && updated == self.updated && mode == self.mode {
            return false;
        }

        self.original = original.to_string();
        self.updated = updated.to_string();
        self.mode = mode;
        self.recompute();
        true
    }

    /// Original text.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Current updated text (including any reverts applied through this session).
    pub fn updated(&self) -> &str {
        &self.updated
    }

    /// Comparison mode.
    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    /// Current segments.
    pub fn segments(&self) -> &[DiffSegment] {
        &self.segments
    }

    /// Number of recomputations since the session was created.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Revert candidates for the current state.
    pub fn candidates(&self) -> Vec<RevertCandidate> {
        revert::candidates(&self.segments, self.mode, &self.original, &self.updated)
    }

    /// Revert the current candidate with the given id.
    ///
    /// Ids come from [`DiffSession::candidates`] and are only valid until the next change.
    pub fn revert(&mut self, id: usize) -> Result<RevertAction, RevertError> {
        if self.mode != ComparisonMode::Token {
            return Err(RevertError::CharacterMode);
        }

        let candidate = self
            .candidates()
            .into_iter()
            .find(|candidate| candidate.id == id)
            .ok_or(RevertError::UnknownCandidate { id })?;
        self.revert_candidate(&candidate)
    }

    /// Apply a candidate obtained earlier to the current updated text.
    ///
    /// Fails with [`RevertError::StaleCandidate`] if the candidate no longer fits.
    pub fn revert_candidate(
        &mut self,
        candidate: &RevertCandidate,
    ) -> Result<RevertAction, RevertError> {
        if self.mode != ComparisonMode::Token {
            return Err(RevertError::CharacterMode);
        }

        let action = revert::action(candidate, &self.updated).ok_or_else(|| {
            RevertError::StaleCandidate {
                id: candidate.id,
                start: candidate.updated_range.start,
                end: candidate.updated_range.end,
                len: self.updated.len(),
            }
        })?;

        self.updated = action.resulting_updated.clone();
        self.recompute();
        Ok(action)
    }

    fn recompute(&mut self) {
        self.segments = (self.provider)(&self.original, &self.updated, self.mode);
        self.version += 1;
        tracing::debug!(
            version = self.version,
            segments = self.segments.len(),
            "diff session recomputed"
        );
    }
}

impl fmt::Debug for DiffSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffSession")
            .field("original", &self.original)
            .field("updated", &self.updated)
            .field("mode", &self.mode)
            .field("segments", &self.segments)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
