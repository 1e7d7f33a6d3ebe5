//! Storage for vocabulary review sessions.
//!
//! This crate moves review data in and out of files so a reader can stop
//! and continue later.
//!
//! # Features
//!
//! - **Word list import** from the CSV produced by text analysis
//! - **Atomic writes** to prevent data corruption
//! - **Version check** before a session file is parsed
//! - **Exclusion lists and exports** as plain one-word-per-line text
//!
//! # File Format
//!
//! Session files are pretty-printed JSON:
//!
//! ```text
//! {
//!   "format_version": 1,
//!   "created_at": "...",
//!   "last_saved_at": "...",
//!   "words": [ { "text": "the", "occurrences": 1204 }, ... ],
//!   "state": { "name": "...", "entries": [ { "index": 0, "state": "known" } ], "filter": { ... } }
//! }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use vocab_store::{SessionFile, load_catalog_csv, load_session, save_session};
//!
//! let catalog = load_catalog_csv(Path::new("oliver.csv"))?;
//! let session = Session::new("Oliver Twist", Arc::new(catalog))?;
//!
//! let mut file = SessionFile::from_session(&session);
//! save_session(&mut file, Path::new("oliver.vocab.json"))?;
//!
//! let session = load_session(Path::new("oliver.vocab.json"))?.to_session()?;
//! ```
//!
//! # Architecture
//!
//! - `types.rs` - The session file type
//! - `io/` - File I/O operations (catalog import, save, load, word lists)
//! - `error.rs` - Error types with user-friendly messages

mod error;
mod io;
mod types;

pub use error::{Result, StoreError};
pub use io::{
    export_words, is_session_path, load_catalog_csv, load_exclusion_words, load_session,
    load_word_list, parse_session_bytes, parse_word_list, read_catalog_csv, save_session,
    write_atomic,
};
pub use types::{CURRENT_FORMAT_VERSION, SessionFile, StoredWord};
