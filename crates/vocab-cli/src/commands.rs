//! Subcommand implementations.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::info;
use vocab_model::WordState;
use vocab_review::{Progress, Session};
use vocab_store::{SessionFile, export_words, load_catalog_csv, load_session, save_session};

use crate::review::ReviewLoop;
use crate::settings::Settings;

/// Extension appended to a word list name for its session file.
pub const SESSION_EXTENSION: &str = "vocab.json";

/// Options for `vocab new`.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub words: PathBuf,
    pub name: Option<String>,
    pub output: Option<PathBuf>,
    pub force: bool,
}

/// Create a session file from a word list CSV. Returns the session file path.
pub fn run_new(options: &NewSession, settings: &Settings) -> Result<PathBuf> {
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| options.words.with_extension(SESSION_EXTENSION));
    if output.exists() && !options.force {
        bail!(
            "{} already exists (use --force to replace it)",
            output.display()
        );
    }

    let catalog = load_catalog_csv(&options.words)?;
    let name = options
        .name
        .clone()
        .unwrap_or_else(|| crate::settings::list_name(&options.words));
    let mut session = Session::new(name, Arc::new(catalog))?;
    let filter = settings.filter.to_filter_config()?;
    session
        .apply_filter(filter)
        .context("apply the filter from settings")?;

    let mut file = SessionFile::from_session(&session);
    save_session(&mut file, &output)?;
    info!(
        session = %session.name(),
        words = session.catalog().len(),
        path = %output.display(),
        "created review session"
    );
    Ok(output)
}

/// Run the interactive loop on stdin/stdout.
pub fn run_review(path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    review_with(path, stdin.lock(), stdout.lock())
}

/// Run the interactive loop with the given input and output.
pub fn review_with<R: BufRead, W: Write>(path: &Path, input: R, output: W) -> Result<()> {
    let file = load_session(path)?;
    let mut review = ReviewLoop::new(file, path)?;
    review.run(input, output)
}

/// Name and progress of a stored session.
pub fn run_progress(path: &Path) -> Result<(String, Progress)> {
    let session = load_session(path)?.to_session()?;
    Ok((session.name().to_string(), session.progress()))
}

/// Write the words in `states` to `output`. Returns the number written.
pub fn run_export(path: &Path, states: &[WordState], output: &Path) -> Result<usize> {
    let session = load_session(path)?.to_session()?;
    let count = export_words(
        output,
        session.exported_words(states).map(|(word, _)| word),
    )?;
    Ok(count)
}
