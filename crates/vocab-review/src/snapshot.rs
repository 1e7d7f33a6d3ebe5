//! Persistable session state.
//!
//! Only the parts a reader chooses are saved: the session name, the
//! classified words and the filter. The cursor and search are derived and
//! are recomputed when a session is restored.

use serde::{Deserialize, Serialize};
use vocab_model::{FilterConfig, WordState};

/// Review outcome for one catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationEntry {
    pub index: usize,
    pub state: WordState,
}

/// Session state handed to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub name: String,
    /// Classified words in ascending index order.
    pub entries: Vec<ClassificationEntry>,
    #[serde(default)]
    pub filter: FilterConfig,
}

impl SessionState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            filter: FilterConfig::default(),
        }
    }
}
