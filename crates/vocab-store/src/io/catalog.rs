//! Ranked word list import.
//!
//! Text analysis happens upstream; it hands over a CSV with one row per
//! word, most frequent first:
//!
//! ```text
//! word,occurrences
//! the,1204
//! and,988
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use vocab_model::Catalog;

use crate::error::{Result, StoreError};

#[derive(Debug, Deserialize)]
struct CatalogRow {
    word: String,
    occurrences: u32,
}

/// Load a ranked word list from a CSV file.
pub fn load_catalog_csv(path: &Path) -> Result<Catalog> {
    let file = File::open(path).map_err(|e| StoreError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    let catalog = read_catalog_csv(file, path)?;
    tracing::info!(
        words = catalog.len(),
        "Loaded word list from {}",
        path.display()
    );
    Ok(catalog)
}

/// Read a ranked word list; `path` is only used in error messages.
pub fn read_catalog_csv<R: Read>(reader: R, path: &Path) -> Result<Catalog> {
    let invalid = |reason: String| StoreError::InvalidWordList {
        path: path.to_path_buf(),
        reason,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut words = Vec::new();
    for (row, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let record = record.map_err(|e| invalid(e.to_string()))?;
        if record.word.is_empty() {
            return Err(invalid(format!("row {} has no word", row + 1)));
        }
        words.push((record.word, record.occurrences));
    }
    Ok(Catalog::from_words(words)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Catalog> {
        read_catalog_csv(text.as_bytes(), Path::new("words.csv"))
    }

    #[test]
    fn test_reads_rows_in_rank_order() {
        let catalog = read("word,occurrences\nthe, 12\nOliver,7\n").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().text, "the");
        assert_eq!(catalog.get(1).unwrap().text, "Oliver");
        assert_eq!(catalog.get(1).unwrap().occurrences, 7);
    }

    #[test]
    fn test_header_only_gives_empty_catalog() {
        let catalog = read("word,occurrences\n").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rejects_bad_count() {
        let result = read("word,occurrences\nthe,many\n");
        assert!(matches!(result, Err(StoreError::InvalidWordList { .. })));
    }

    #[test]
    fn test_rejects_blank_word() {
        let result = read("word,occurrences\nthe,3\n ,2\n");
        match result {
            Err(StoreError::InvalidWordList { reason, .. }) => {
                assert_eq!(reason, "row 2 has no word");
            }
            other => panic!("expected invalid word list, got {other:?}"),
        }
    }
}
