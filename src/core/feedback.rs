//! Guess feedback calculation and representation
//!
//! Feedback classifies each guess letter against the target:
//! - `Correct`: right letter, right position (green)
//! - `Present`: right letter, wrong position (yellow)
//! - `Absent`: letter not in the word, or already fully matched (gray)

use super::{Guess, WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

/// Per-letter feedback for a full guess, in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All greens (winning guess)
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper
    /// handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the
    ///    target's available letter pool
    /// 2. Second pass: mark present-but-wrong-position letters from the
    ///    remaining pool, consuming one pool entry per mark
    ///
    /// A letter that appears fewer times in the target than in the guess is
    /// marked `Present`/`Correct` only up to its count in the target.
    #[must_use]
    pub fn calculate(guess: &Guess, target: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for i in 0..WORD_LENGTH {
            if guess.letters()[i] == target.letters()[i] {
                result[i] = LetterFeedback::Correct;

                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, letter still in the pool
        for i in 0..WORD_LENGTH {
            if result[i] == LetterFeedback::Absent {
                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterFeedback::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Get the per-letter feedback in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct (winning guess)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0
            .iter()
            .all(|&letter| letter == LetterFeedback::Correct)
    }

    /// Count the number of correct-position letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&letter| letter == LetterFeedback::Correct)
            .count()
    }

    /// Count the number of wrong-position letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&letter| letter == LetterFeedback::Present)
            .count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|letter| match letter {
                LetterFeedback::Correct => '🟩',
                LetterFeedback::Present => '🟨',
                LetterFeedback::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    /// Renders as a compact string like "GY-GY"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            let ch = match letter {
                LetterFeedback::Correct => 'G',
                LetterFeedback::Present => 'Y',
                LetterFeedback::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
