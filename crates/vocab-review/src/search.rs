//! Search within the words offered for review.
//!
//! The match list always reflects the live acceptance predicate: it is
//! rebuilt whenever the query, the filter or a classification changes.

use std::fmt;

use vocab_model::Catalog;

/// Direction for stepping through matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Match position as shown next to the search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// No query entered.
    Inactive,
    /// A query is entered but nothing matches.
    NoMatches,
    /// 1-based position of the selected match.
    Position { current: usize, total: usize },
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => Ok(()),
            Self::NoMatches => f.write_str("No matches"),
            Self::Position { current, total } => write!(f, "{current} of {total} matches"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    needle: String,
    matches: Vec<usize>,
    pointer: Option<usize>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Ascending catalog indices of the current matches.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Catalog index of the selected match.
    pub fn current_match(&self) -> Option<usize> {
        self.pointer.map(|p| self.matches[p])
    }

    /// Replace the query and select the first match at or after `cursor`.
    ///
    /// Returns the catalog index of the selected match.
    pub fn set_query<F>(
        &mut self,
        query: &str,
        catalog: &Catalog,
        accept: F,
        cursor: Option<usize>,
    ) -> Option<usize>
    where
        F: Fn(usize) -> bool,
    {
        self.query = query.to_string();
        self.needle = query.to_lowercase();
        self.collect_matches(catalog, accept);
        self.pointer = self.default_pointer(cursor);
        self.current_match()
    }

    /// Rebuild matches after an acceptance change.
    ///
    /// The selection stays on the same word if it still matches.
    pub fn refresh<F>(&mut self, catalog: &Catalog, accept: F, cursor: Option<usize>)
    where
        F: Fn(usize) -> bool,
    {
        let selected = self.current_match();
        self.collect_matches(catalog, accept);
        self.pointer = match selected.and_then(|index| self.matches.binary_search(&index).ok()) {
            Some(position) => Some(position),
            None => self.default_pointer(cursor),
        };
    }

    /// Step cyclically through the matches.
    ///
    /// Returns the newly selected catalog index, or `None` when there are no
    /// matches, in which case nothing changes.
    pub fn advance(&mut self, direction: Direction) -> Option<usize> {
        let total = self.matches.len();
        if total == 0 {
            return None;
        }
        let next = match (self.pointer, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => total - 1,
            (Some(p), Direction::Next) => (p + 1) % total,
            (Some(p), Direction::Previous) => (p + total - 1) % total,
        };
        self.pointer = Some(next);
        self.current_match()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn status(&self) -> MatchStatus {
        if !self.is_active() {
            return MatchStatus::Inactive;
        }
        match self.pointer {
            Some(p) => MatchStatus::Position {
                current: p + 1,
                total: self.matches.len(),
            },
            None => MatchStatus::NoMatches,
        }
    }

    fn collect_matches<F>(&mut self, catalog: &Catalog, accept: F)
    where
        F: Fn(usize) -> bool,
    {
        self.matches.clear();
        if self.needle.is_empty() {
            return;
        }
        self.matches.extend(
            catalog
                .iter()
                .filter(|word| {
                    accept(word.index) && word.text.to_lowercase().contains(&self.needle)
                })
                .map(|word| word.index),
        );
    }

    fn default_pointer(&self, cursor: Option<usize>) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        let from = cursor.unwrap_or(0);
        Some(self.matches.iter().position(|&index| index >= from).unwrap_or(0))
    }
}
