//! Review outcomes and the ledger that records them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Review outcome for a single word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordState {
    /// Not reviewed yet.
    #[default]
    Unclassified,
    /// The reader knows this word.
    Known,
    /// The reader wants to learn this word.
    Unknown,
}

impl WordState {
    /// All states in display order.
    pub const ALL: [WordState; 3] = [Self::Unclassified, Self::Known, Self::Unknown];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Unclassified => "Unseen",
            Self::Known => "Known",
            Self::Unknown => "Unknown",
        }
    }

    #[inline]
    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Unclassified)
    }
}

impl fmt::Display for WordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Per-word review state covering every catalog index.
///
/// Entries are overwritten, never removed; the last write wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationLedger {
    states: Vec<WordState>,
}

impl ClassificationLedger {
    /// Create a ledger for `size` words, all unclassified.
    pub fn new(size: usize) -> Self {
        Self {
            states: vec![WordState::Unclassified; size],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of the word at `index`; out-of-range indices read as unclassified.
    #[inline]
    pub fn get(&self, index: usize) -> WordState {
        self.states.get(index).copied().unwrap_or_default()
    }

    /// Record `state` for `index` and return the previous state.
    pub fn set(&mut self, index: usize, state: WordState) -> Result<WordState> {
        let size = self.states.len();
        let slot = self
            .states
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, size })?;
        Ok(std::mem::replace(slot, state))
    }

    /// Number of words currently in `state`.
    pub fn count(&self, state: WordState) -> usize {
        self.states.iter().filter(|s| **s == state).count()
    }

    /// Iterate `(index, state)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, WordState)> + '_ {
        self.states.iter().copied().enumerate()
    }
}
