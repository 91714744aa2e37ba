//! Persistence adapter
//!
//! A thin key-value seam between the engine and durable storage. The engine
//! loads once at construction and writes back synchronously after every
//! state change; a read failure degrades to defaults and never blocks a
//! game from starting.

mod json;

pub use json::JsonFileStore;

use crate::engine::{Statistics, UsedWordHistory};
use serde::{Deserialize, Serialize};

/// Everything the engine persists between runs
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub win_count: u32,
    pub current_streak: u32,
    pub best_score: u32,
    pub used_words: Vec<String>,
}

impl PersistedState {
    /// Split into the engine's statistics and history values
    #[must_use]
    pub fn into_parts(self) -> (Statistics, UsedWordHistory) {
        let stats = Statistics {
            win_count: self.win_count,
            current_streak: self.current_streak,
            best_score: self.best_score,
        };
        (stats, UsedWordHistory::from_words(self.used_words))
    }
}

/// Storage seam consumed by the engine
///
/// Saves are synchronous and best-effort: implementations must not panic or
/// surface errors into game flow. [`load`](StateStore::load) returns
/// defaults for missing or unreadable state.
pub trait StateStore {
    /// Load persisted state, defaulting anything missing or unparseable
    fn load(&mut self) -> PersistedState;

    /// Write the three statistics counters
    fn save_statistics(&mut self, stats: &Statistics);

    /// Write the used-word history
    fn save_used_words(&mut self, history: &UsedWordHistory);
}

/// In-memory store used by tests and throwaway sessions
///
/// Records every save so tests can assert on persistence side effects.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub state: PersistedState,
    pub stats_saves: usize,
    pub history_saves: usize,
}

impl MemoryStore {
    /// Create a store that loads the given state
    #[must_use]
    pub fn with_state(state: PersistedState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }
}

impl StateStore for MemoryStore {
    fn load(&mut self) -> PersistedState {
        self.state.clone()
    }

    fn save_statistics(&mut self, stats: &Statistics) {
        self.state.win_count = stats.win_count;
        self.state.current_streak = stats.current_streak;
        self.state.best_score = stats.best_score;
        self.stats_saves += 1;
    }

    fn save_used_words(&mut self, history: &UsedWordHistory) {
        self.state.used_words = history.words().to_vec();
        self.history_saves += 1;
    }
}
