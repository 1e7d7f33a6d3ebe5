//! Filter settings.
//!
//! A [`FilterConfig`] is plain data. Evaluation lives in the review crate so
//! the model stays free of review policy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Named list of words to hide from review (e.g. words already learned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSet {
    /// Display name, unique within a [`FilterConfig`].
    pub name: String,
    /// Lowercase words.
    pub words: BTreeSet<String>,
    /// Whether this set currently hides its words.
    pub enabled: bool,
}

impl ExclusionSet {
    /// Create an enabled set; words are trimmed and lowercased, blanks dropped.
    pub fn from_words<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            name: name.into(),
            words,
            enabled: true,
        }
    }

    /// Whether `lowercase_word` is in the set.
    #[inline]
    pub fn contains(&self, lowercase_word: &str) -> bool {
        self.words.contains(lowercase_word)
    }
}

/// Criteria that narrow the words offered for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum number of characters.
    pub min_letters: usize,
    /// Minimum number of occurrences in the source text.
    pub min_occurrences: u32,
    /// Only offer words whose first character is uppercase.
    pub require_initial_capital: bool,
    /// Word lists to hide.
    pub exclusion_sets: Vec<ExclusionSet>,
    /// Master switch; when false every word passes.
    pub filters_enabled: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_letters: 0,
            min_occurrences: 0,
            require_initial_capital: false,
            exclusion_sets: Vec::new(),
            filters_enabled: true,
        }
    }
}

impl FilterConfig {
    /// A configuration that accepts every word.
    pub fn disabled() -> Self {
        Self {
            filters_enabled: false,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_min_letters(mut self, min_letters: usize) -> Self {
        self.min_letters = min_letters;
        self
    }

    #[must_use]
    pub fn with_min_occurrences(mut self, min_occurrences: u32) -> Self {
        self.min_occurrences = min_occurrences;
        self
    }

    #[must_use]
    pub fn with_initial_capital(mut self, require: bool) -> Self {
        self.require_initial_capital = require;
        self
    }

    #[must_use]
    pub fn with_filters_enabled(mut self, enabled: bool) -> Self {
        self.filters_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_exclusion_set(mut self, set: ExclusionSet) -> Self {
        self.add_exclusion_set(set);
        self
    }

    /// Add a set, replacing any existing set with the same name.
    pub fn add_exclusion_set(&mut self, set: ExclusionSet) {
        match self.exclusion_sets.iter_mut().find(|s| s.name == set.name) {
            Some(existing) => *existing = set,
            None => self.exclusion_sets.push(set),
        }
    }

    /// Remove the named set, returning it if present.
    pub fn remove_exclusion_set(&mut self, name: &str) -> Option<ExclusionSet> {
        let position = self.exclusion_sets.iter().position(|s| s.name == name)?;
        Some(self.exclusion_sets.remove(position))
    }

    /// Enable or disable the named set. Returns false if no such set exists.
    pub fn set_exclusion_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.exclusion_sets.iter_mut().find(|s| s.name == name) {
            Some(set) => {
                set.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Sets that currently hide words.
    pub fn enabled_exclusions(&self) -> impl Iterator<Item = &ExclusionSet> {
        self.exclusion_sets.iter().filter(|s| s.enabled)
    }
}
