//! Aggregate game statistics
//!
//! Survives across games; persisted after every terminal outcome.

use serde::{Deserialize, Serialize};

/// Win/streak/best-score counters
///
/// `best_score` is the fewest attempts used in any win; `0` means no win has
/// been recorded yet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub win_count: u32,
    pub current_streak: u32,
    pub best_score: u32,
}

impl Statistics {
    /// Record a win that used `attempts` guesses
    ///
    /// Increments the win count and streak; lowers the best score if this
    /// win used fewer attempts (or no best score was set).
    pub fn record_win(&mut self, attempts: u32) {
        self.win_count += 1;
        self.current_streak += 1;
        if self.best_score == 0 || attempts < self.best_score {
            self.best_score = attempts;
        }
    }

    /// Record a loss: resets the streak, leaves wins and best score alone
    pub fn record_loss(&mut self) {
        self.current_streak = 0;
    }

    /// Best score as an option, `None` while no win has been recorded
    #[must_use]
    pub const fn best_score(&self) -> Option<u32> {
        match self.best_score {
            0 => None,
            score => Some(score),
        }
    }
}
