#![warn(missing_docs)]
//! Text Diff - Headless Word-Level Diff and Revert Engine
//!
//! # Overview
//!
//! `text-diff` computes a minimal, readable edit script between two versions of a plain text and
//! derives localized "undo this change" actions from it. It does not render anything: the
//! output is an ordered list of tagged segments plus a list of revert candidates, to be drawn
//! and hit-tested by an upper layer.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  DiffSession (recompute on change, reverts) │  ← Stateful API
//! ├─────────────────────────────────────────────┤
//! │  Revert resolver (candidates, actions)      │  ← Undo individual changes
//! ├─────────────────────────────────────────────┤
//! │  Engine (whitespace policy, refinement)     │  ← Display-ready segments
//! ├─────────────────────────────────────────────┤
//! │  Edit script (Myers, generic)               │  ← Minimal edit operations
//! ├─────────────────────────────────────────────┤
//! │  Tokenizer (UAX #29 words)                  │  ← Words / punctuation / whitespace
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use text_diff::{ComparisonMode, EditKind, action, candidates, compute_segments};
//!
//! let original = "Hello brave world";
//! let updated = "Hello world";
//!
//! let segments = compute_segments(original, updated, ComparisonMode::Token);
//! assert!(segments.iter().any(|s| s.kind == EditKind::Delete && s.text == "brave"));
//!
//! let found = candidates(&segments, ComparisonMode::Token, original, updated);
//! let reverted = action(&found[0], updated).unwrap();
//! assert_eq!(reverted.resulting_updated, "Hello brave world");
//! ```
//!
//! # Module Description
//!
//! - [`token`] - word / punctuation / whitespace tokenizer
//! - [`edit_script`] - generic Myers shortest edit script
//! - [`engine`] - segment computation
//! - [`revert`] - revert candidates and actions
//! - [`session`] - stateful diff session
//!
//! # Unicode Support
//!
//! - Word boundaries follow UAX #29
//! - Character refinement compares extended grapheme clusters, so combined characters and
//!   emoji sequences are never split
//! - Revert ranges are UTF-8 byte offsets and always fall on character boundaries
//!
//! # Cargo Features
//!
//! - `serde` - `Serialize`/`Deserialize` for segments, candidates and actions

pub mod edit_script;
pub mod engine;
mod error;
pub mod revert;
mod segment;
pub mod session;
pub mod token;

pub use edit_script::Operation;
pub use engine::compute_segments;
pub use error::RevertError;
pub use revert::{RevertAction, RevertCandidate, RevertKind, action, candidates};
pub use segment::{ComparisonMode, DiffSegment, EditKind, TokenKind};
pub use session::{DiffSession, SegmentProvider};
pub use token::{Token, tokenize};
