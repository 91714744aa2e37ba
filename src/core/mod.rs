//! Core domain types
//!
//! Words, guesses, and per-letter feedback.

mod feedback;
mod guess;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use guess::Guess;
pub use word::{Word, WordError};

/// Length of every target word and guess
pub const WORD_LENGTH: usize = 5;
