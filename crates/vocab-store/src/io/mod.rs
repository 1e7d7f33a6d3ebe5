//! File I/O operations.
//!
//! This module handles:
//! - Importing ranked word lists from CSV
//! - Saving session files with atomic writes
//! - Loading session files with version validation
//! - Reading exclusion word lists (plain or from a saved session) and writing exports

mod catalog;
mod load;
mod save;
mod word_list;

pub use catalog::{load_catalog_csv, read_catalog_csv};
pub use load::{load_session, parse_session_bytes};
pub use save::{save_session, write_atomic};
pub use word_list::{
    export_words, is_session_path, load_exclusion_words, load_word_list, parse_word_list,
};
