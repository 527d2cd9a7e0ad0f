//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use text_diff::ComparisonMode;

#[derive(Parser, Debug)]
#[command(name = "text-diff")]
#[command(about = "Word-level diff of two texts, with revertable changes")]
#[command(version)]
pub struct Cli {
    /// Original text (a file path, or the text itself with --literal)
    pub original: String,

    /// Updated text (a file path, or the text itself with --literal)
    pub updated: String,

    /// Treat ORIGINAL and UPDATED as literal text instead of file paths
    #[arg(long)]
    pub literal: bool,

    /// Comparison granularity
    #[arg(long, value_enum, default_value_t = Mode::Token)]
    pub mode: Mode,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markup)]
    pub format: Format,

    /// List revert candidates instead of segments
    #[arg(long, conflicts_with = "revert")]
    pub candidates: bool,

    /// Revert the candidate with this id and print the resulting updated text
    #[arg(long, value_name = "ID")]
    pub revert: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Whole words, punctuation and whitespace
    Token,
    /// Refine replaced words grapheme by grapheme
    Character,
}

impl From<Mode> for ComparisonMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Token => ComparisonMode::Token,
            Mode::Character => ComparisonMode::Character,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Inline `[-deleted-]` and `{+inserted+}` markers
    Markup,
    /// JSON serialization of the result
    Json,
}

impl Cli {
    /// Resolve an input argument to its text.
    pub fn source(&self, arg: &str) -> std::io::Result<String> {
        if self.literal {
            Ok(arg.to_string())
        } else {
            std::fs::read_to_string(PathBuf::from(arg))
        }
    }
}
