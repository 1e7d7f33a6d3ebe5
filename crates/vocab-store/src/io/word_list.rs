//! Plain word lists: exclusion lists in, exports out.

use std::fs;
use std::path::Path;

use vocab_model::WordState;

use crate::error::{Result, StoreError};
use crate::io::load::load_session;
use crate::io::save::write_atomic;

/// Whether `path` names a session file rather than a plain word list.
pub fn is_session_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Words to hide, read from a plain word list or from a saved session.
///
/// From a session file only the words whose saved state is one of
/// `states` are taken; `states` is ignored for plain lists.
pub fn load_exclusion_words(path: &Path, states: &[WordState]) -> Result<Vec<String>> {
    if !is_session_path(path) {
        return load_word_list(path);
    }
    let words = load_session(path)?.words_in(states);
    tracing::debug!(words = words.len(), "Read session words from {}", path.display());
    Ok(words)
}

/// Load a newline-separated word list.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    let words = parse_word_list(&text);
    tracing::debug!(words = words.len(), "Read word list {}", path.display());
    Ok(words)
}

/// One word per line; blank lines and `#` comments are skipped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Write words one per line and return how many were written.
pub fn export_words<'a, I>(path: &Path, words: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = String::new();
    let mut count = 0usize;
    for word in words {
        text.push_str(word);
        text.push('\n');
        count += 1;
    }
    write_atomic(path, text.as_bytes())?;
    tracing::info!(count, "Exported words to {}", path.display());
    Ok(count)
}
