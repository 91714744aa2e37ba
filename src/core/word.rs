//! Target word representation
//!
//! A Word is a validated 5-letter dictionary entry, stored uppercase.

use super::WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::fmt;

/// A 5-letter target word
///
/// Stored uppercase with the letters split out for feedback calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.chars().count() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.chars().count()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = ['\0'; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = ch;
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as an array of uppercase letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the first letter, used as the hint
    #[inline]
    #[must_use]
    pub const fn first_letter(&self) -> char {
        self.letters[0]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("TANAH").unwrap();
        assert_eq!(word.text(), "TANAH");
        assert_eq!(word.letters(), &['T', 'A', 'N', 'A', 'H']);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("tanah").unwrap();
        assert_eq!(word.text(), "TANAH");

        let word2 = Word::new("TaNaH").unwrap();
        assert_eq!(word2.text(), "TANAH");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("BANGSA"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new("DOA"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("TAN4H").is_err()); // Number
        assert!(Word::new("TAN H").is_err()); // Space
        assert!(Word::new("TANA!").is_err()); // Punctuation
    }

    #[test]
    fn word_first_letter() {
        let word = Word::new("HELLO").unwrap();
        assert_eq!(word.first_letter(), 'H');
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("SPEED").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'S'), Some(&1));
        assert_eq!(counts.get(&'P'), Some(&1));
        assert_eq!(counts.get(&'E'), Some(&2));
        assert_eq!(counts.get(&'D'), Some(&1));
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("SALAH").unwrap();
        let word2 = Word::new("salah").unwrap();
        let word3 = Word::new("SABAR").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_display() {
        let word = Word::new("CINTA").unwrap();
        assert_eq!(format!("{word}"), "CINTA");
    }
}
