//! Word review session engine.
//!
//! This crate keeps the state of a reader working through a ranked word
//! list: which words have been classified, which the filter hides, which
//! word is on screen and where the search is pointing.
//!
//! # Architecture
//!
//! - `filter` - Filter evaluation and the review acceptance predicate
//! - `navigation` - Nearest-acceptable-index search for the cursor
//! - `search` - Match list and cyclic match navigation
//! - `progress` - Progress summary
//! - `snapshot` - Persistable session state
//! - `session` - The [`Session`] aggregate the application calls into
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vocab_model::{Catalog, WordState};
//! use vocab_review::Session;
//!
//! let catalog = Catalog::from_words([("and", 9), ("the", 7), ("to", 4)]).unwrap();
//! let mut session = Session::new("demo", Arc::new(catalog)).unwrap();
//!
//! session.classify_current(WordState::Known).unwrap();
//! assert_eq!(session.current_word().unwrap().text, "the");
//! ```

mod error;
pub mod filter;
pub mod navigation;
mod progress;
mod search;
mod session;
mod snapshot;

pub use error::{Result, ReviewError};
pub use navigation::{NoAcceptableIndex, find_closest};
pub use progress::Progress;
pub use search::{Direction, MatchStatus, SearchState};
pub use session::Session;
pub use snapshot::{ClassificationEntry, SessionState};
