//! Interactive CLI game mode
//!
//! Text-based game loop over stdin: prompt for guesses, render colored
//! feedback, show statistics when a game ends.

use crate::engine::{GameEngine, GuessResult, MAX_ATTEMPTS};
use crate::output::{colorize_guess, print_game_over, print_statistics};
use crate::store::StateStore;
use rand::Rng;
use std::io::{self, Write};

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play<S: StateStore, R: Rng>(mut engine: GameEngine<S, R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Guess the Word                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in {MAX_ATTEMPTS} attempts.");
    println!("After each guess you'll see per-letter feedback:");
    println!("  - Green:  right letter, right position");
    println!("  - Yellow: right letter, wrong position");
    println!("  - Dimmed: letter not in the word\n");
    println!("Commands: 'hint' for the first letter, 'new' for a new game, 'quit' to exit\n");

    loop {
        let prompt = format!(
            "Guess {}/{MAX_ATTEMPTS}",
            engine.current_attempt() + 1
        );
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                engine.start_new_game();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "hint" | "h" => {
                println!("💡 The word starts with '{}'\n", engine.hint());
                continue;
            }
            _ => {}
        }

        match engine.submit_guess(&input) {
            GuessResult::InvalidLength => {
                println!("❌ Guesses must be exactly 5 letters.\n");
            }
            GuessResult::GameOver => {
                println!("The game is over. Type 'new' to play again.\n");
            }
            GuessResult::Valid(feedback) => {
                println!(
                    "{}\n",
                    colorize_guess(&input.to_uppercase(), feedback.letters())
                );
            }
            GuessResult::Correct => {
                println!(
                    "{}",
                    colorize_guess(&input.to_uppercase(), engine.last_feedback())
                );
                print_game_over(true, engine.current_attempt(), engine.target_word());
                if !offer_replay(&mut engine)? {
                    return Ok(());
                }
            }
            GuessResult::OutOfAttempts => {
                println!(
                    "{}",
                    colorize_guess(&input.to_uppercase(), engine.last_feedback())
                );
                print_game_over(false, engine.current_attempt(), engine.target_word());
                if !offer_replay(&mut engine)? {
                    return Ok(());
                }
            }
        }
    }
}

fn offer_replay<S: StateStore, R: Rng>(engine: &mut GameEngine<S, R>) -> Result<bool, String> {
    let stats = engine.statistics();
    print_statistics(&stats, engine.used_words().len());

    match get_user_input("\nPlay again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            engine.start_new_game();
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
