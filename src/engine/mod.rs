//! Game engine
//!
//! Owns target selection, guess evaluation, attempt tracking, win/loss
//! determination, and statistics aggregation. No dependency on any
//! presentation layer.

mod game;
mod history;
mod stats;

pub use game::{GameEngine, GuessResult, MAX_ATTEMPTS};
pub use history::{HISTORY_CAP, UsedWordHistory};
pub use stats::Statistics;
