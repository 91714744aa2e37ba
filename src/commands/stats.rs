//! Statistics display command

use crate::output::print_statistics;
use crate::store::StateStore;

/// Print the persisted statistics without starting a game
pub fn run_stats<S: StateStore>(store: &mut S) {
    let state = store.load();
    let used_words = state.used_words.len();
    let (stats, _) = state.into_parts();

    print_statistics(&stats, used_words);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, PersistedState};

    #[test]
    fn run_stats_reads_but_never_writes() {
        let mut store = MemoryStore::with_state(PersistedState {
            win_count: 3,
            current_streak: 1,
            best_score: 4,
            used_words: vec!["TANAH".into()],
        });

        run_stats(&mut store);

        assert_eq!(store.stats_saves, 0);
        assert_eq!(store.history_saves, 0);
    }
}
