//! Review session.
//!
//! A [`Session`] owns everything that changes while a reader works through a
//! word list. Each user action maps to one method call; afterwards the caller
//! queries the read-only views ([`Session::current_word`],
//! [`Session::progress`], [`Session::match_status`]) to redraw.
//!
//! # Invariants
//!
//! - The cursor is `Some` iff at least one word is offered for review, and
//!   then it points at such a word.
//! - Search matches are always computed against the live filter and ledger.
//! - `dirty` is set by every classification and cleared by save/load.

use std::sync::Arc;

use tracing::{debug, info, warn};
use vocab_model::{Catalog, ClassificationLedger, FilterConfig, WordRecord, WordState};

use crate::error::{ReviewError, Result};
use crate::filter::{self, Acceptance};
use crate::navigation::find_closest;
use crate::progress::Progress;
use crate::search::{Direction, MatchStatus, SearchState};
use crate::snapshot::{ClassificationEntry, SessionState};

#[derive(Debug, Clone)]
pub struct Session {
    name: String,
    catalog: Arc<Catalog>,
    ledger: ClassificationLedger,
    filter: FilterConfig,
    cursor: Option<usize>,
    search: SearchState,
    dirty: bool,
}

impl Session {
    /// Start reviewing a freshly analysed catalog.
    pub fn new(name: impl Into<String>, catalog: Arc<Catalog>) -> Result<Self> {
        if catalog.is_empty() {
            return Err(ReviewError::EmptyCatalog);
        }
        let mut session = Self {
            name: name.into(),
            ledger: ClassificationLedger::new(catalog.len()),
            catalog,
            filter: FilterConfig::default(),
            cursor: None,
            search: SearchState::new(),
            dirty: false,
        };
        session.reposition(0)?;
        info!(
            session = %session.name,
            words = session.catalog.len(),
            "started review session"
        );
        Ok(session)
    }

    /// Rebuild a session from saved state against `catalog`.
    ///
    /// Entries for indices the catalog no longer has are dropped. The cursor
    /// is recomputed from the start of the catalog rather than restored.
    pub fn from_persistable_state(state: SessionState, catalog: Arc<Catalog>) -> Result<Self> {
        if catalog.is_empty() {
            return Err(ReviewError::EmptyCatalog);
        }
        let SessionState {
            name,
            entries,
            mut filter,
        } = state;

        let mut ledger = ClassificationLedger::new(catalog.len());
        let mut dropped = 0usize;
        for entry in entries {
            if ledger.set(entry.index, entry.state).is_err() {
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!(
                session = %name,
                dropped,
                words = catalog.len(),
                "ignored classifications outside the word list"
            );
        }

        if filter::validate(&filter, &catalog).is_err() {
            warn!(session = %name, "saved filter excludes every word; filters disabled");
            filter.filters_enabled = false;
        }

        let mut session = Self {
            name,
            catalog,
            ledger,
            filter,
            cursor: None,
            search: SearchState::new(),
            dirty: false,
        };
        session.reposition(0)?;
        info!(
            session = %session.name,
            classified = session.progress().classified(),
            "restored review session"
        );
        Ok(session)
    }

    /// Capture what needs saving. The cursor is not part of it.
    pub fn to_persistable_state(&self) -> SessionState {
        SessionState {
            name: self.name.clone(),
            entries: self
                .ledger
                .iter()
                .filter(|(_, state)| state.is_classified())
                .map(|(index, state)| ClassificationEntry { index, state })
                .collect(),
            filter: self.filter.clone(),
        }
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Record the review outcome for the word at `index`.
    ///
    /// Classifying the current word moves the cursor to the nearest word
    /// still offered for review, looking from the following word. Classifying
    /// any other word leaves the cursor alone unless it has become invalid.
    pub fn classify(&mut self, index: usize, state: WordState) -> Result<()> {
        let previous = self.ledger.set(index, state)?;
        self.dirty = true;
        debug!(index, ?previous, ?state, "classified word");

        match self.cursor {
            Some(current) if current == index => self.reposition(anchor(index) + 1)?,
            Some(current) if self.acceptance().accepts(current) => {}
            _ => self.reposition(anchor(index))?,
        }
        self.refresh_search();
        Ok(())
    }

    /// Classify the word under the cursor.
    pub fn classify_current(&mut self, state: WordState) -> Result<()> {
        let index = self.cursor.ok_or(ReviewError::NoCurrentWord)?;
        self.classify(index, state)
    }

    /// Number of words in `state`.
    pub fn count_by_state(&self, state: WordState) -> usize {
        self.ledger.count(state)
    }

    pub fn state_of(&self, index: usize) -> WordState {
        self.ledger.get(index)
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Replace the filter.
    ///
    /// A filter that would hide every word is rejected and the current filter
    /// stays in force.
    pub fn apply_filter(&mut self, config: FilterConfig) -> Result<()> {
        if let Err(error) = filter::validate(&config, &self.catalog) {
            warn!(session = %self.name, "rejected filter: {error}");
            return Err(error);
        }
        self.filter = config;
        let anchor_index = self.cursor.unwrap_or(0);
        self.reposition(anchor(anchor_index))?;
        self.refresh_search();
        info!(
            session = %self.name,
            enabled = self.filter.filters_enabled,
            accepted = filter::count_accepted(&self.filter, &self.catalog),
            "applied filter"
        );
        Ok(())
    }

    /// Switch the whole filter on or off, keeping its settings.
    pub fn set_filters_enabled(&mut self, enabled: bool) -> Result<()> {
        let config = self.filter.clone().with_filters_enabled(enabled);
        self.apply_filter(config)
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Search the words offered for review.
    ///
    /// When something matches, the cursor moves to the selected match; a
    /// search without matches leaves the cursor where it was.
    pub fn set_query(&mut self, query: &str) -> MatchStatus {
        let acceptance = Acceptance::new(&self.catalog, &self.ledger, &self.filter);
        let selected =
            self.search
                .set_query(query, &self.catalog, |i| acceptance.accepts(i), self.cursor);
        if let Some(index) = selected {
            self.cursor = Some(index);
        }
        let status = self.search.status();
        debug!(query, %status, "search updated");
        status
    }

    /// Move to the next or previous match, wrapping around.
    pub fn advance(&mut self, direction: Direction) -> MatchStatus {
        if let Some(index) = self.search.advance(direction) {
            self.cursor = Some(index);
        }
        self.search.status()
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn match_status(&self) -> MatchStatus {
        self.search.status()
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The word under review, or `None` once every word has been handled.
    pub fn current_word(&self) -> Option<&WordRecord> {
        self.cursor.and_then(|index| self.catalog.get(index))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    pub fn progress(&self) -> Progress {
        Progress::compute(&self.catalog, &self.ledger, &self.filter)
    }

    /// Words whose state is one of `states`, in catalog order.
    pub fn exported_words<'a>(
        &'a self,
        states: &'a [WordState],
    ) -> impl Iterator<Item = (&'a str, WordState)> + 'a {
        self.catalog.iter().filter_map(move |word| {
            let state = self.ledger.get(word.index);
            states
                .contains(&state)
                .then_some((word.text.as_str(), state))
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether classifications changed since the session was created,
    /// loaded or saved.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Call after the session has been written out.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn acceptance(&self) -> Acceptance<'_> {
        Acceptance::new(&self.catalog, &self.ledger, &self.filter)
    }

    /// Point the cursor at the accepted word nearest `requested`, or mark
    /// the session exhausted when nothing is accepted.
    fn reposition(&mut self, requested: i64) -> Result<()> {
        let acceptance = Acceptance::new(&self.catalog, &self.ledger, &self.filter);
        let next = if acceptance.any() {
            Some(find_closest(requested, self.catalog.len(), |i| {
                acceptance.accepts(i)
            })?)
        } else {
            None
        };
        if next != self.cursor {
            debug!(from = ?self.cursor, to = ?next, requested, "moved review cursor");
        }
        if next.is_none() && self.cursor.is_some() {
            info!(session = %self.name, "no words left to review");
        }
        self.cursor = next;
        Ok(())
    }

    fn refresh_search(&mut self) {
        if !self.search.is_active() {
            return;
        }
        let acceptance = Acceptance::new(&self.catalog, &self.ledger, &self.filter);
        self.search
            .refresh(&self.catalog, |i| acceptance.accepts(i), self.cursor);
    }
}

/// Catalog indices always fit in `i64`.
#[inline]
fn anchor(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
