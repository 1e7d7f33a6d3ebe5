//! Ranked word catalog.
//!
//! The catalog is built once from the output of text analysis and never
//! changes afterwards. Each record's index equals its position, so indices
//! are contiguous from zero.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single ranked word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Position in the catalog (0 is the most frequent word).
    pub index: usize,
    /// Word text in its original case.
    pub text: String,
    /// Number of times the word occurs in the analysed text.
    pub occurrences: u32,
}

/// Immutable ordered sequence of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    words: Vec<WordRecord>,
}

impl Catalog {
    /// Build a catalog from `(text, occurrences)` pairs in rank order.
    ///
    /// Words whose text is blank are rejected.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .enumerate()
            .map(|(index, (text, occurrences))| {
                let text = text.into();
                if text.trim().is_empty() {
                    return Err(ModelError::BlankWord { rank: index + 1 });
                }
                Ok(WordRecord {
                    index,
                    text,
                    occurrences,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { words })
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WordRecord> {
        self.words.get(index)
    }

    /// Look up a word, failing with [`ModelError::IndexOutOfRange`].
    pub fn word(&self, index: usize) -> Result<&WordRecord> {
        self.words.get(index).ok_or(ModelError::IndexOutOfRange {
            index,
            size: self.words.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordRecord> {
        self.words.iter()
    }

    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a WordRecord;
    type IntoIter = std::slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
