//! Used-word history
//!
//! Remembers recently selected target words so new games avoid repeats
//! until the whole list has been played through.

use serde::{Deserialize, Serialize};

/// Maximum number of remembered target words
pub const HISTORY_CAP: usize = 50;

/// Insertion-ordered set of recently used target words
///
/// Capped at [`HISTORY_CAP`] entries; the oldest entry is evicted first.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsedWordHistory {
    words: Vec<String>,
}

impl UsedWordHistory {
    /// Restore a history from persisted entries
    ///
    /// Duplicates are dropped and only the most recent [`HISTORY_CAP`]
    /// entries are kept, so a corrupt or oversized save degrades cleanly.
    #[must_use]
    pub fn from_words(entries: Vec<String>) -> Self {
        let mut history = Self::default();
        for entry in entries {
            history.insert(&entry);
        }
        history
    }

    /// Check whether a word was recently used
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Add a word, evicting the oldest entry past the cap
    ///
    /// Re-inserting a known word moves it to the most-recent position.
    pub fn insert(&mut self, word: &str) {
        self.words.retain(|w| w != word);
        self.words.push(word.to_string());

        if self.words.len() > HISTORY_CAP {
            let excess = self.words.len() - HISTORY_CAP;
            self.words.drain(..excess);
        }
    }

    /// Forget all remembered words
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Number of remembered words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether no words are remembered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remembered words, oldest first
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
