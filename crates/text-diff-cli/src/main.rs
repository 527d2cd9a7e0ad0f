//! `text-diff`: diff two texts from the command line.
//!
//! ```bash
//! text-diff old.txt new.txt
//! text-diff --literal "a quick fox" "a slow fox" --candidates
//! text-diff --literal "a quick fox" "a slow fox" --revert 0
//! ```
//!
//! Set `TEXT_DIFF_LOG=debug` to see what the engine is doing.

mod args;
mod render;

use anyhow::{Context, Result};
use args::{Cli, Format};
use clap::Parser;
use text_diff::DiffSession;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TEXT_DIFF_LOG";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    print!("{output}");
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let original = cli
        .source(&cli.original)
        .with_context(|| format!("failed to read original text from {}", cli.original))?;
    let updated = cli
        .source(&cli.updated)
        .with_context(|| format!("failed to read updated text from {}", cli.updated))?;

    let mut session = DiffSession::new(original, updated, cli.mode.into());
    tracing::debug!(segments = session.segments().len(), "diff computed");

    if let Some(id) = cli.revert {
        let action = session
            .revert(id)
            .with_context(|| format!("failed to revert candidate {id}"))?;
        return match cli.format {
            Format::Markup => Ok(action.resulting_updated),
            Format::Json => to_json(&action),
        };
    }

    if cli.candidates {
        let candidates = session.candidates();
        return match cli.format {
            Format::Markup => Ok(render::candidate_lines(&candidates)),
            Format::Json => to_json(&candidates),
        };
    }

    match cli.format {
        Format::Markup => Ok(format!("{}\n", render::markup(session.segments()))),
        Format::Json => to_json(session.segments()),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    json.push('\n');
    Ok(json)
}
