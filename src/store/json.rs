//! JSON file store
//!
//! Persists the whole [`PersistedState`] as one JSON document. Writes go
//! through a temp file and rename so a crash mid-write never corrupts the
//! previous save.

use super::{PersistedState, StateStore};
use crate::engine::{Statistics, UsedWordHistory};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed store holding one JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    state: PersistedState,
}

impl JsonFileStore {
    /// Open a store at the given path
    ///
    /// The file is not created until the first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: PersistedState::default(),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(path: &Path) -> PersistedState {
        // Missing or corrupt saves degrade to defaults
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn write_state(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.state)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)
    }

    fn flush(&self) {
        if let Err(err) = self.write_state() {
            eprintln!(
                "warning: failed to save game data to {}: {err}",
                self.path.display()
            );
        }
    }
}

impl StateStore for JsonFileStore {
    fn load(&mut self) -> PersistedState {
        self.state = Self::read_state(&self.path);
        self.state.clone()
    }

    fn save_statistics(&mut self, stats: &Statistics) {
        self.state.win_count = stats.win_count;
        self.state.current_streak = stats.current_streak;
        self.state.best_score = stats.best_score;
        self.flush();
    }

    fn save_used_words(&mut self, history: &UsedWordHistory) {
        self.state.used_words = history.words().to_vec();
        self.flush();
    }
}
