//! Player guess representation
//!
//! A Guess is raw player input that passed the length check. There is no
//! dictionary validation: any 5-character input is playable.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// A 5-character player guess, uppercased
///
/// Unlike [`Word`], a guess is not checked against an alphabet. The length
/// check counts characters, so it is independent of case and encoding width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    letters: [char; WORD_LENGTH],
}

impl Guess {
    /// Parse raw input into a guess
    ///
    /// Returns `None` only when the input is not exactly 5 characters.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut letters = ['\0'; WORD_LENGTH];
        let mut count = 0;

        for ch in input.chars() {
            if count == WORD_LENGTH {
                return None;
            }
            letters[count] = ch.to_ascii_uppercase();
            count += 1;
        }

        (count == WORD_LENGTH).then_some(Self { letters })
    }

    /// Get the guess as an array of uppercased characters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Check whether the uppercased guess equals the target word
    #[inline]
    #[must_use]
    pub fn matches(&self, target: &Word) -> bool {
        &self.letters == target.letters()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.letters {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
