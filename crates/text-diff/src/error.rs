use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced when reverting a change through a [`DiffSession`](crate::DiffSession).
pub enum RevertError {
    #[error("revert is only available in token comparison mode")]
    /// The session compares at character granularity, which offers no revert candidates.
    CharacterMode,

    #[error("no revert candidate with id {id}")]
    /// No current candidate has the requested id.
    UnknownCandidate {
        /// The requested candidate id.
        id: usize,
    },

    #[error("revert candidate {id} does not fit the updated text ({start}..{end} of {len} bytes)")]
    /// The candidate's range lies outside the updated text or inside a character.
    StaleCandidate {
        /// The candidate id.
        id: usize,
        /// Start of the candidate's updated range.
        start: usize,
        /// End of the candidate's updated range.
        end: usize,
        /// Length of the updated text in bytes.
        len: usize,
    },
}
