//! Progress summary.

use serde::{Deserialize, Serialize};
use vocab_model::{Catalog, ClassificationLedger, FilterConfig, WordState};

use crate::filter::Acceptance;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Words in the catalog.
    pub total: usize,
    pub known: usize,
    pub unknown: usize,
    pub unclassified: usize,
    /// Words hidden by the filter, whatever their state.
    pub filtered_out: usize,
    /// Words still offered for review.
    pub remaining: usize,
}

impl Progress {
    pub fn compute(
        catalog: &Catalog,
        ledger: &ClassificationLedger,
        filter: &FilterConfig,
    ) -> Self {
        let acceptance = Acceptance::new(catalog, ledger, filter);
        let (filtered_out, remaining) =
            (0..catalog.len()).fold((0, 0), |(hidden, open), index| {
                if !acceptance.filter_accepts(index) {
                    (hidden + 1, open)
                } else if acceptance.accepts(index) {
                    (hidden, open + 1)
                } else {
                    (hidden, open)
                }
            });
        Self {
            total: catalog.len(),
            known: ledger.count(WordState::Known),
            unknown: ledger.count(WordState::Unknown),
            unclassified: ledger.count(WordState::Unclassified),
            filtered_out,
            remaining,
        }
    }

    /// Words marked known or unknown.
    #[inline]
    pub fn classified(&self) -> usize {
        self.known + self.unknown
    }

    /// Share of the catalog that has been classified, in percent.
    pub fn percent_done(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.classified() as f64 * 100.0 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts() {
        let catalog =
            Catalog::from_words([("and", 9), ("the", 8), ("surgeon", 7), ("to", 6)]).unwrap();
        let mut ledger = ClassificationLedger::new(4);
        ledger.set(0, WordState::Known).unwrap();
        ledger.set(2, WordState::Unknown).unwrap();
        let filter = FilterConfig::default().with_min_letters(3);

        let progress = Progress::compute(&catalog, &ledger, &filter);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.known, 1);
        assert_eq!(progress.unknown, 1);
        assert_eq!(progress.unclassified, 2);
        assert_eq!(progress.classified(), 2);
        assert_eq!(progress.filtered_out, 1);
        assert_eq!(progress.remaining, 1);
        assert!((progress.percent_done() - 50.0).abs() < f64::EPSILON);
    }
}
