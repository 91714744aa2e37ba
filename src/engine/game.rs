//! Game state machine
//!
//! One [`GameEngine`] holds one live game at a time plus the process-wide
//! statistics and used-word history. All operations are synchronous and run
//! on the caller's thread; persistence writes happen inline after every
//! state change.

use super::{Statistics, UsedWordHistory};
use crate::core::{Feedback, Guess, LetterFeedback, Word};
use crate::store::StateStore;
use crate::wordlists::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Guesses allowed per game
pub const MAX_ATTEMPTS: u32 = 6;

/// Outcome of submitting one guess
///
/// All recoverable conditions are expressed here; the engine never uses
/// errors for game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess matched the target; the game is won
    Correct,
    /// Wrong guess with attempts remaining; carries the per-letter feedback
    Valid(Feedback),
    /// Input was not exactly 5 characters; nothing changed
    InvalidLength,
    /// Wrong guess that used the final attempt; the game is lost
    OutOfAttempts,
    /// The game already ended; nothing changed
    GameOver,
}

/// The Wordle game engine
///
/// Generic over the storage seam and the random source so tests can inject
/// a recording store and a seeded rng. Construction loads persisted state
/// and starts the first game immediately, so a target word always exists.
pub struct GameEngine<S: StateStore, R: Rng = StdRng> {
    words: WordList,
    store: S,
    rng: R,
    stats: Statistics,
    history: UsedWordHistory,
    target: Word,
    attempt: u32,
    won: bool,
    over: bool,
    last_feedback: Option<Feedback>,
}

impl<S: StateStore> GameEngine<S> {
    /// Create an engine with an OS-seeded random source
    ///
    /// # Panics
    /// Panics if `words` is empty; the embedded list never is, and callers
    /// loading custom lists must check before constructing.
    #[must_use]
    pub fn new(words: WordList, store: S) -> Self {
        Self::with_rng(words, store, StdRng::from_os_rng())
    }
}

impl<S: StateStore, R: Rng> GameEngine<S, R> {
    /// Create an engine with an explicit random source
    ///
    /// Loads statistics and used-word history from the store (degrading to
    /// defaults on any read problem) and starts the first game.
    ///
    /// # Panics
    /// Panics if `words` is empty.
    #[must_use]
    pub fn with_rng(words: WordList, mut store: S, mut rng: R) -> Self {
        assert!(!words.is_empty(), "word list has no selectable words");

        let (stats, mut history) = store.load().into_parts();
        let target = Self::select_target(&words, &mut history, &mut rng);
        store.save_used_words(&history);

        Self {
            words,
            store,
            rng,
            stats,
            history,
            target,
            attempt: 0,
            won: false,
            over: false,
            last_feedback: None,
        }
    }

    /// Start a new game, discarding the current one
    ///
    /// Picks a target not in the used-word history; if the history covers
    /// the whole list it is cleared first and the pick falls back to the
    /// full list. The chosen word joins the history (oldest entry evicted
    /// past the cap) and the history is persisted.
    pub fn start_new_game(&mut self) {
        self.target = Self::select_target(&self.words, &mut self.history, &mut self.rng);
        self.attempt = 0;
        self.won = false;
        self.over = false;
        self.last_feedback = None;
        self.store.save_used_words(&self.history);
    }

    /// Submit one guess and advance the state machine
    ///
    /// Processing order: length check, terminal check, evaluation, attempt
    /// increment, win check, exhaustion check. Length-invalid input and
    /// guesses after the game ended mutate nothing.
    pub fn submit_guess(&mut self, input: &str) -> GuessResult {
        let Some(guess) = Guess::parse(input) else {
            return GuessResult::InvalidLength;
        };

        if self.over {
            return GuessResult::GameOver;
        }

        let feedback = Feedback::calculate(&guess, &self.target);
        self.last_feedback = Some(feedback);
        self.attempt += 1;

        if guess.matches(&self.target) {
            self.won = true;
            self.over = true;
            self.stats.record_win(self.attempt);
            self.store.save_statistics(&self.stats);
            return GuessResult::Correct;
        }

        if self.attempt >= MAX_ATTEMPTS {
            self.over = true;
            self.stats.record_loss();
            self.store.save_statistics(&self.stats);
            return GuessResult::OutOfAttempts;
        }

        GuessResult::Valid(feedback)
    }

    /// First letter of the target word
    #[must_use]
    pub fn hint(&self) -> char {
        self.target.first_letter()
    }

    /// The current target word
    #[must_use]
    pub fn target_word(&self) -> &str {
        self.target.text()
    }

    /// Guesses consumed in the current game
    #[must_use]
    pub const fn current_attempt(&self) -> u32 {
        self.attempt
    }

    /// Whether the current game reached a terminal state
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.over
    }

    /// Whether the current game was won
    #[must_use]
    pub const fn is_game_won(&self) -> bool {
        self.won
    }

    /// Feedback from the most recent evaluated guess, empty before any
    #[must_use]
    pub fn last_feedback(&self) -> &[LetterFeedback] {
        self.last_feedback
            .as_ref()
            .map_or(&[], |feedback| feedback.letters())
    }

    /// Aggregate statistics across games
    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.stats
    }

    /// Recently used target words
    #[must_use]
    pub const fn used_words(&self) -> &UsedWordHistory {
        &self.history
    }

    fn select_target(words: &WordList, history: &mut UsedWordHistory, rng: &mut R) -> Word {
        let candidates: Vec<&Word> = words
            .words()
            .iter()
            .filter(|word| !history.contains(word.text()))
            .collect();

        let chosen = if candidates.is_empty() {
            // History covers the whole list: reset it and reopen every word
            history.clear();
            words.words()[rng.random_range(0..words.len())].clone()
        } else {
            candidates[rng.random_range(0..candidates.len())].clone()
        };

        history.insert(chosen.text());
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, PersistedState};

    fn word_list(words: &[&str]) -> WordList {
        WordList::from_slice(words)
    }

    fn engine_with(words: &[&str]) -> GameEngine<MemoryStore, StdRng> {
        GameEngine::with_rng(
            word_list(words),
            MemoryStore::default(),
            StdRng::seed_from_u64(7),
        )
    }

    fn wrong_guess(engine: &GameEngine<MemoryStore, StdRng>) -> String {
        // ZZZZZ is in no test list, so it can never accidentally win
        assert_ne!(engine.target_word(), "ZZZZZ");
        "ZZZZZ".to_string()
    }

    #[test]
    fn construction_starts_a_game() {
        let engine = engine_with(&["TANAH", "SALAH", "CINTA"]);

        assert_eq!(engine.current_attempt(), 0);
        assert!(!engine.is_game_over());
        assert!(!engine.is_game_won());
        assert!(engine.last_feedback().is_empty());
        assert_eq!(engine.target_word().len(), 5);
    }

    #[test]
    fn construction_restores_persisted_state() {
        let state = PersistedState {
            win_count: 9,
            current_streak: 4,
            best_score: 2,
            used_words: vec!["TANAH".into()],
        };
        let engine = GameEngine::with_rng(
            word_list(&["TANAH", "SALAH", "CINTA"]),
            MemoryStore::with_state(state),
            StdRng::seed_from_u64(1),
        );

        assert_eq!(engine.statistics().win_count, 9);
        assert_eq!(engine.statistics().current_streak, 4);
        assert_eq!(engine.statistics().best_score(), Some(2));
        // TANAH was already used, so the first game avoids it
        assert_ne!(engine.target_word(), "TANAH");
    }

    #[test]
    fn invalid_length_mutates_nothing() {
        let mut engine = engine_with(&["TANAH", "SALAH"]);

        assert_eq!(engine.submit_guess("DOA"), GuessResult::InvalidLength);
        assert_eq!(engine.submit_guess("BANGSA"), GuessResult::InvalidLength);
        assert_eq!(engine.submit_guess(""), GuessResult::InvalidLength);

        assert_eq!(engine.current_attempt(), 0);
        assert!(engine.last_feedback().is_empty());
        assert_eq!(engine.statistics(), Statistics::default());
    }

    #[test]
    fn correct_guess_wins_and_records_statistics() {
        let mut engine = engine_with(&["TANAH", "SALAH", "CINTA"]);
        let target = engine.target_word().to_string();

        // Case does not matter for the win check
        let result = engine.submit_guess(&target.to_lowercase());

        assert_eq!(result, GuessResult::Correct);
        assert!(engine.is_game_won());
        assert!(engine.is_game_over());
        assert_eq!(engine.current_attempt(), 1);
        assert_eq!(engine.last_feedback(), [LetterFeedback::Correct; 5]);

        let stats = engine.statistics();
        assert_eq!(stats.win_count, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_score(), Some(1));
        assert_eq!(engine.store.stats_saves, 1);
    }

    #[test]
    fn wrong_guess_returns_feedback_and_counts_attempt() {
        let mut engine = engine_with(&["TANAH", "SALAH"]);
        let guess = wrong_guess(&engine);

        match engine.submit_guess(&guess) {
            GuessResult::Valid(feedback) => {
                assert_eq!(feedback.letters(), &[LetterFeedback::Absent; 5]);
            }
            other => panic!("expected Valid, got {other:?}"),
        }

        assert_eq!(engine.current_attempt(), 1);
        assert!(!engine.is_game_over());
        assert_eq!(engine.last_feedback().len(), 5);
    }

    #[test]
    fn six_wrong_guesses_exhaust_attempts() {
        let mut engine = engine_with(&["TANAH", "SALAH"]);
        let guess = wrong_guess(&engine);

        for _ in 0..5 {
            assert!(matches!(
                engine.submit_guess(&guess),
                GuessResult::Valid(_)
            ));
        }

        assert_eq!(engine.submit_guess(&guess), GuessResult::OutOfAttempts);
        assert!(engine.is_game_over());
        assert!(!engine.is_game_won());
        assert_eq!(engine.current_attempt(), MAX_ATTEMPTS);
        assert_eq!(engine.statistics().current_streak, 0);

        // A seventh guess hits the frozen-state path
        assert_eq!(engine.submit_guess(&guess), GuessResult::GameOver);
        assert_eq!(engine.current_attempt(), MAX_ATTEMPTS);
    }

    #[test]
    fn terminal_state_freezes_everything() {
        let mut engine = engine_with(&["TANAH", "SALAH"]);
        let target = engine.target_word().to_string();
        engine.submit_guess(&target);

        let stats_before = engine.statistics();
        let feedback_before = engine.last_feedback().to_vec();

        assert_eq!(engine.submit_guess(&target), GuessResult::GameOver);
        assert_eq!(engine.submit_guess("ZZZZZ"), GuessResult::GameOver);

        assert_eq!(engine.statistics(), stats_before);
        assert_eq!(engine.last_feedback(), feedback_before);
        assert_eq!(engine.current_attempt(), 1);
    }

    #[test]
    fn win_streak_and_best_score_sequence() {
        let mut engine = engine_with(&["TANAH", "SALAH", "CINTA", "SABAR"]);
        let wrong = wrong_guess(&engine);

        // Win in 3 attempts
        engine.submit_guess(&wrong);
        engine.submit_guess(&wrong);
        let target = engine.target_word().to_string();
        assert_eq!(engine.submit_guess(&target), GuessResult::Correct);

        // Win in 2 attempts
        engine.start_new_game();
        engine.submit_guess(&wrong);
        let target = engine.target_word().to_string();
        assert_eq!(engine.submit_guess(&target), GuessResult::Correct);

        let stats = engine.statistics();
        assert_eq!(stats.win_count, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.best_score(), Some(2));

        // A loss resets the streak but nothing else
        engine.start_new_game();
        for _ in 0..6 {
            engine.submit_guess(&wrong);
        }

        let stats = engine.statistics();
        assert_eq!(stats.win_count, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_score(), Some(2));
    }

    #[test]
    fn new_game_resets_state_and_persists_history() {
        let mut engine = engine_with(&["TANAH", "SALAH", "CINTA"]);
        let saves_before = engine.store.history_saves;
        engine.submit_guess("ZZZZZ");

        engine.start_new_game();

        assert_eq!(engine.current_attempt(), 0);
        assert!(!engine.is_game_over());
        assert!(engine.last_feedback().is_empty());
        assert_eq!(engine.store.history_saves, saves_before + 1);
        assert!(engine.store.state.used_words.contains(&engine.target_word().to_string()));
    }

    #[test]
    fn targets_never_repeat_until_list_is_exhausted() {
        let words = ["TANAH", "SALAH", "CINTA", "SABAR", "HUJAN"];
        let mut engine = engine_with(&words);

        let mut seen = vec![engine.target_word().to_string()];
        for _ in 1..words.len() {
            engine.start_new_game();
            let target = engine.target_word().to_string();
            assert!(!seen.contains(&target), "target {target} repeated early");
            seen.push(target);
        }

        // Whole list used: the next game clears the history and starts over
        assert_eq!(engine.used_words().len(), words.len());
        engine.start_new_game();
        assert_eq!(engine.used_words().len(), 1);
    }

    #[test]
    fn history_never_exceeds_cap() {
        let words: Vec<String> = ('A'..='Z')
            .flat_map(|a| ('A'..='C').map(move |b| format!("{a}{b}AAA")))
            .collect();
        let entries: Vec<&str> = words.iter().map(String::as_str).collect();
        assert!(entries.len() > super::super::HISTORY_CAP);

        let mut engine = GameEngine::with_rng(
            word_list(&entries),
            MemoryStore::default(),
            StdRng::seed_from_u64(42),
        );

        for _ in 0..entries.len() + 10 {
            engine.start_new_game();
            assert!(engine.used_words().len() <= super::super::HISTORY_CAP);
        }
    }

    #[test]
    fn hint_is_first_letter_of_target() {
        let engine = engine_with(&["TANAH", "SALAH"]);
        let expected = engine.target_word().chars().next().unwrap();
        assert_eq!(engine.hint(), expected);
    }
}
