//! Wordle Game
//!
//! A single-player word-guessing game engine with persistent statistics and
//! a used-word history that avoids repeating targets.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::engine::{GameEngine, GuessResult};
//! use wordle_game::store::MemoryStore;
//! use wordle_game::wordlists::WordList;
//!
//! let mut engine = GameEngine::new(WordList::embedded(), MemoryStore::default());
//!
//! match engine.submit_guess("TANAH") {
//!     GuessResult::Correct => println!("Won!"),
//!     GuessResult::Valid(feedback) => println!("{feedback}"),
//!     other => println!("{other:?}"),
//! }
//! ```

// Core domain types
pub mod core;

// Game state machine and statistics
pub mod engine;

// Persistence adapter
pub mod store;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
