//! Dictionary snapshot partitioned by word length

use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Immutable set of words, grouped by length
///
/// Each partition is sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    partitions: BTreeMap<usize, Vec<Word>>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// # Examples
    /// ```
    /// use wordsieve::core::Word;
    /// use wordsieve::wordlists::Dictionary;
    ///
    /// let words = ["crane", "at", "Crane", "slate"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::from_words(words);
    ///
    /// assert_eq!(dictionary.partition(5).len(), 2);
    /// assert_eq!(dictionary.partition(2).len(), 1);
    /// assert!(dictionary.partition(7).is_empty());
    /// ```
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut partitions: BTreeMap<usize, Vec<Word>> = BTreeMap::new();
        for word in words {
            partitions.entry(word.len()).or_default().push(word);
        }
        for partition in partitions.values_mut() {
            partition.sort_unstable();
            partition.dedup();
        }
        Self { partitions }
    }

    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::from_words(words_from_slice(slice))
    }

    /// Load a dictionary from a word-per-line file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::from_words)
    }

    /// All words of the given length, sorted
    #[must_use]
    pub fn partition(&self, length: usize) -> &[Word] {
        self.partitions
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Word lengths present, shortest first
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.partitions.keys().copied()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.partition(word.len()).binary_search(word).is_ok()
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }
}
