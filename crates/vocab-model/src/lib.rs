//! Data model types for vocabulary review sessions.
//!
//! # Module Organization
//!
//! - [`catalog`]: The ranked, immutable word list produced by text analysis
//! - [`state`]: Review outcome per word and the ledger that records it
//! - [`filter`]: Filter settings that narrow the words offered for review
//! - [`error`]: Model construction errors

pub mod catalog;
pub mod error;
pub mod filter;
pub mod state;

pub use catalog::{Catalog, WordRecord};
pub use error::{ModelError, Result};
pub use filter::{ExclusionSet, FilterConfig};
pub use state::{ClassificationLedger, WordState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_config_serializes() {
        let config = FilterConfig::default()
            .with_min_letters(4)
            .with_exclusion_set(ExclusionSet::from_words("basic", ["The", "and"]));
        let json = serde_json::to_string(&config).expect("serialize filter");
        let round: FilterConfig = serde_json::from_str(&json).expect("deserialize filter");
        assert_eq!(round, config);
    }

    #[test]
    fn test_word_state_serializes_lowercase() {
        let json = serde_json::to_string(&WordState::Unknown).expect("serialize state");
        assert_eq!(json, "\"unknown\"");
    }
}
