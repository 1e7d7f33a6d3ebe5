//! Filter evaluation and the review acceptance predicate.

use vocab_model::{Catalog, ClassificationLedger, FilterConfig, WordRecord, WordState};

use crate::error::{ReviewError, Result};

/// Whether `word` passes every enabled criterion of `config`.
pub fn evaluate(config: &FilterConfig, word: &WordRecord) -> bool {
    if !config.filters_enabled {
        return true;
    }
    if word.text.chars().count() < config.min_letters {
        return false;
    }
    if word.occurrences < config.min_occurrences {
        return false;
    }
    if config.require_initial_capital && !word.text.chars().next().is_some_and(char::is_uppercase)
    {
        return false;
    }

    let mut exclusions = config.enabled_exclusions().peekable();
    if exclusions.peek().is_none() {
        return true;
    }
    let lowercase = word.text.to_lowercase();
    exclusions.all(|set| !set.contains(&lowercase))
}

/// Number of catalog words the filter lets through, ignoring review state.
pub fn count_accepted(config: &FilterConfig, catalog: &Catalog) -> usize {
    catalog.iter().filter(|word| evaluate(config, word)).count()
}

/// Reject a configuration that would hide every word in `catalog`.
pub fn validate(config: &FilterConfig, catalog: &Catalog) -> Result<()> {
    if config.filters_enabled && count_accepted(config, catalog) == 0 {
        return Err(ReviewError::FilterExcludesAll {
            catalog_size: catalog.len(),
        });
    }
    Ok(())
}

/// Which words are offered for review: they pass the filter and are
/// still unclassified.
#[derive(Debug, Clone, Copy)]
pub struct Acceptance<'a> {
    catalog: &'a Catalog,
    ledger: &'a ClassificationLedger,
    filter: &'a FilterConfig,
}

impl<'a> Acceptance<'a> {
    pub fn new(
        catalog: &'a Catalog,
        ledger: &'a ClassificationLedger,
        filter: &'a FilterConfig,
    ) -> Self {
        Self {
            catalog,
            ledger,
            filter,
        }
    }

    /// Whether the word at `index` passes the filter alone.
    pub fn filter_accepts(&self, index: usize) -> bool {
        self.catalog
            .get(index)
            .is_some_and(|word| evaluate(self.filter, word))
    }

    /// Whether the word at `index` is offered for review.
    pub fn accepts(&self, index: usize) -> bool {
        self.ledger.get(index) == WordState::Unclassified && self.filter_accepts(index)
    }

    /// Whether any word is offered for review.
    pub fn any(&self) -> bool {
        (0..self.catalog.len()).any(|index| self.accepts(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_model::ExclusionSet;

    fn word(text: &str, occurrences: u32) -> WordRecord {
        WordRecord {
            index: 0,
            text: text.to_string(),
            occurrences,
        }
    }

    #[test]
    fn test_disabled_filter_accepts_everything() {
        let config = FilterConfig::default()
            .with_min_letters(100)
            .with_filters_enabled(false);
        assert!(evaluate(&config, &word("a", 1)));
    }

    #[test]
    fn test_min_letters_counts_characters() {
        let config = FilterConfig::default().with_min_letters(4);
        assert!(evaluate(&config, &word("café", 1)));
        assert!(!evaluate(&config, &word("caf", 1)));
    }

    #[test]
    fn test_min_occurrences() {
        let config = FilterConfig::default().with_min_occurrences(3);
        assert!(evaluate(&config, &word("surgeon", 3)));
        assert!(!evaluate(&config, &word("surgeon", 2)));
    }

    #[test]
    fn test_initial_capital() {
        let config = FilterConfig::default().with_initial_capital(true);
        assert!(evaluate(&config, &word("Oliver", 1)));
        assert!(!evaluate(&config, &word("oliver", 1)));
    }

    #[test]
    fn test_exclusion_sets_respect_enabled_flag() {
        let mut config = FilterConfig::default()
            .with_exclusion_set(ExclusionSet::from_words("seen", ["workhouse"]));
        assert!(!evaluate(&config, &word("Workhouse", 5)));

        config.set_exclusion_enabled("seen", false);
        assert!(evaluate(&config, &word("Workhouse", 5)));
    }

    #[test]
    fn test_validate_rejects_filter_excluding_all() {
        let catalog = Catalog::from_words([("and", 5), ("the", 4)]).unwrap();
        let config = FilterConfig::default().with_min_letters(1000);

        assert!(matches!(
            validate(&config, &catalog),
            Err(ReviewError::FilterExcludesAll { catalog_size: 2 })
        ));
        assert!(validate(&config.clone().with_filters_enabled(false), &catalog).is_ok());
    }

    #[test]
    fn test_acceptance_skips_classified_words() {
        let catalog = Catalog::from_words([("and", 5), ("the", 4)]).unwrap();
        let mut ledger = ClassificationLedger::new(2);
        ledger.set(0, WordState::Known).unwrap();
        let filter = FilterConfig::default();
        let acceptance = Acceptance::new(&catalog, &ledger, &filter);

        assert!(!acceptance.accepts(0));
        assert!(acceptance.filter_accepts(0));
        assert!(acceptance.accepts(1));
        assert!(!acceptance.accepts(2));
        assert!(acceptance.any());
    }
}
