//! Target word lists
//!
//! Provides the embedded word list and the filtered, deduplicated
//! [`WordList`] the engine selects targets from.

mod embedded;
pub mod loader;

pub use embedded::WORDS;

use crate::core::{WORD_LENGTH, Word};

/// An immutable, ordered list of target words
///
/// Built once at startup. Entries that are not exactly 5 letters are
/// dropped, duplicates are removed keeping first-occurrence order.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a word list from raw string entries
    ///
    /// Oversized, undersized, and otherwise invalid entries are silently
    /// skipped; duplicates keep their first occurrence.
    #[must_use]
    pub fn from_slice(entries: &[&str]) -> Self {
        let mut words: Vec<Word> = Vec::new();

        for entry in entries {
            if entry.chars().count() != WORD_LENGTH {
                continue;
            }
            if let Ok(word) = Word::new(*entry)
                && !words.contains(&word)
            {
                words.push(word);
            }
        }

        Self { words }
    }

    /// Build the default list from the embedded words
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(WORDS)
    }

    /// Number of selectable target words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the list has no selectable words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the words as a slice, in list order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_list_is_nonempty() {
        let list = WordList::embedded();
        assert!(!list.is_empty());
    }

    #[test]
    fn embedded_list_entries_are_five_letters() {
        for word in WordList::embedded().words() {
            assert_eq!(
                word.text().len(),
                5,
                "Word '{word}' is not 5 letters after filtering"
            );
        }
    }

    #[test]
    fn embedded_list_has_no_duplicates() {
        let list = WordList::embedded();
        let unique: std::collections::HashSet<_> =
            list.words().iter().map(Word::text).collect();
        assert_eq!(unique.len(), list.len());
    }

    #[test]
    fn raw_list_contains_oversized_entries() {
        // The raw list ships with longer words; the filter drops them
        assert!(WORDS.iter().any(|w| w.len() != 5));

        let list = WordList::embedded();
        assert!(list.len() < WORDS.len());
    }

    #[test]
    fn from_slice_filters_and_dedups() {
        let list = WordList::from_slice(&["TANAH", "BANGSA", "DOA", "TANAH", "SALAH"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[0].text(), "TANAH");
        assert_eq!(list.words()[1].text(), "SALAH");
    }

    #[test]
    fn from_slice_preserves_order() {
        let list = WordList::from_slice(&["SALAH", "TANAH", "CINTA"]);
        let texts: Vec<_> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["SALAH", "TANAH", "CINTA"]);
    }
}
