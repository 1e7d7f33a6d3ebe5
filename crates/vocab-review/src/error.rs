//! Review session error types.
//!
//! Errors carry a user-facing message and an optional hint so the
//! surrounding application can show them without further interpretation.

use thiserror::Error;
use vocab_model::ModelError;

use crate::navigation::NoAcceptableIndex;

/// Review operation error.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// A session cannot be started without words.
    #[error("Word list is empty")]
    EmptyCatalog,

    /// The filter would hide every word; the previous filter stays active.
    #[error("Filter excludes all {catalog_size} words")]
    FilterExcludesAll { catalog_size: usize },

    /// An operation that needs a current word was called while exhausted.
    #[error("No word is currently selected for review")]
    NoCurrentWord,

    /// Word index outside the catalog.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The cursor search ran without an acceptable index. Callers must
    /// check for exhaustion first, so this indicates a defect.
    #[error("Cursor invariant violated")]
    InvariantViolation(#[from] NoAcceptableIndex),
}

impl ReviewError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyCatalog => "There are no words to review in this word list.".to_string(),
            Self::FilterExcludesAll { .. } => {
                "The filter would hide every word, so it has not been applied.".to_string()
            }
            Self::NoCurrentWord => "There are no more words to review.".to_string(),
            Self::Model(error) => error.to_string(),
            Self::InvariantViolation(error) => format!("Internal error: {error}"),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::EmptyCatalog => Some("Choose a text that contains some words.".into()),
            Self::FilterExcludesAll { .. } => Some(
                "Lower the minimum letters or occurrences, or disable some word lists.".into(),
            ),
            Self::NoCurrentWord => Some("Relax the filter or disable it to see more words.".into()),
            Self::Model(_) | Self::InvariantViolation(_) => None,
        }
    }
}

/// Result type alias for review operations.
pub type Result<T> = std::result::Result<T, ReviewError>;
