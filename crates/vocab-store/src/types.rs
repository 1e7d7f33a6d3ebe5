//! Session file type.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vocab_model::{Catalog, WordState};
use vocab_review::{Session, SessionState};

use crate::error::Result;

/// Current session file format version.
///
/// Increment this when making breaking changes to the file format.
/// The loader will reject files with version > CURRENT_FORMAT_VERSION.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// A word as stored in a session file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWord {
    pub text: String,
    pub occurrences: u32,
}

/// Root session file structure.
///
/// Carries the word list alongside the review state so a session can be
/// reopened without the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    /// Format version (for future migrations).
    pub format_version: u32,

    /// When the session was created.
    pub created_at: String,

    /// When the session was last saved.
    pub last_saved_at: String,

    /// Words in rank order.
    pub words: Vec<StoredWord>,

    /// Name, classifications and filter.
    pub state: SessionState,
}

impl SessionFile {
    /// Capture a session for saving.
    pub fn from_session(session: &Session) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            format_version: CURRENT_FORMAT_VERSION,
            created_at: now.clone(),
            last_saved_at: now,
            words: session
                .catalog()
                .iter()
                .map(|word| StoredWord {
                    text: word.text.clone(),
                    occurrences: word.occurrences,
                })
                .collect(),
            state: session.to_persistable_state(),
        }
    }

    /// Replace the review state, keeping the creation time.
    pub fn update_from(&mut self, session: &Session) {
        self.state = session.to_persistable_state();
    }

    /// Update the last saved timestamp.
    pub fn touch(&mut self) {
        self.last_saved_at = Utc::now().to_rfc3339();
    }

    /// Rebuild the word catalog stored in this file.
    pub fn catalog(&self) -> Result<Catalog> {
        let catalog = Catalog::from_words(
            self.words
                .iter()
                .map(|word| (word.text.clone(), word.occurrences)),
        )?;
        Ok(catalog)
    }

    /// Reopen the stored session against its own word list.
    pub fn to_session(&self) -> Result<Session> {
        let catalog = Arc::new(self.catalog()?);
        let session = Session::from_persistable_state(self.state.clone(), catalog)?;
        Ok(session)
    }

    /// Stored words whose saved state is one of `states`, in rank order.
    ///
    /// Entries pointing past the stored word list are skipped.
    pub fn words_in(&self, states: &[WordState]) -> Vec<String> {
        self.state
            .entries
            .iter()
            .filter(|entry| states.contains(&entry.state))
            .filter_map(|entry| self.words.get(entry.index))
            .map(|word| word.text.clone())
            .collect()
    }

    /// Parse the last_saved_at timestamp.
    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_saved_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let catalog = Catalog::from_words([("and", 3), ("the", 2), ("to", 1)]).unwrap();
        Session::new("Oliver Twist", Arc::new(catalog)).unwrap()
    }

    #[test]
    fn test_from_session_captures_words_and_state() {
        let mut session = session();
        session.classify_current(WordState::Known).unwrap();

        let file = SessionFile::from_session(&session);
        assert_eq!(file.format_version, CURRENT_FORMAT_VERSION);
        assert_eq!(file.words.len(), 3);
        assert_eq!(file.words[1].text, "the");
        assert_eq!(file.state.name, "Oliver Twist");
        assert_eq!(file.state.entries.len(), 1);
        assert!(file.last_saved_at().is_some());
    }

    #[test]
    fn test_to_session_restores_progress() {
        let mut session = session();
        session.classify_current(WordState::Known).unwrap();
        session.classify_current(WordState::Unknown).unwrap();

        let restored = SessionFile::from_session(&session).to_session().unwrap();
        assert_eq!(restored.name(), "Oliver Twist");
        assert_eq!(restored.current_word().unwrap().text, "to");
        assert_eq!(restored.count_by_state(WordState::Unknown), 1);
    }

    #[test]
    fn test_update_from_keeps_created_at() {
        let mut session = session();
        let mut file = SessionFile::from_session(&session);
        let created = file.created_at.clone();

        session.classify_current(WordState::Known).unwrap();
        file.update_from(&session);
        assert_eq!(file.created_at, created);
        assert_eq!(file.state.entries.len(), 1);
    }

    #[test]
    fn test_words_in_selects_saved_states() {
        let mut session = session();
        session.classify_current(WordState::Known).unwrap();
        session.classify_current(WordState::Unknown).unwrap();

        let mut file = SessionFile::from_session(&session);
        assert_eq!(file.words_in(&[WordState::Known]), vec!["and"]);
        assert_eq!(
            file.words_in(&[WordState::Known, WordState::Unknown]),
            vec!["and", "the"]
        );

        file.words.truncate(1);
        assert_eq!(
            file.words_in(&[WordState::Known, WordState::Unknown]),
            vec!["and"]
        );
    }
}
