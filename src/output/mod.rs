//! Terminal output formatting

use crate::core::LetterFeedback;
use crate::engine::Statistics;
use colored::Colorize;

/// Render a guess with per-letter coloring
///
/// Correct letters print green, present letters yellow, absent letters
/// dimmed.
#[must_use]
pub fn colorize_guess(guess: &str, feedback: &[LetterFeedback]) -> String {
    guess
        .chars()
        .zip(feedback)
        .map(|(ch, letter)| {
            let cell = format!(" {ch} ");
            match letter {
                LetterFeedback::Correct => cell.on_green().black().bold().to_string(),
                LetterFeedback::Present => cell.on_yellow().black().bold().to_string(),
                LetterFeedback::Absent => cell.dimmed().to_string(),
            }
        })
        .collect()
}

/// Print the statistics block
pub fn print_statistics(stats: &Statistics, used_words: usize) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!(
        "   Wins:            {}",
        stats.win_count.to_string().bright_yellow().bold()
    );
    println!(
        "   Current streak:  {}",
        stats.current_streak.to_string().bright_yellow()
    );
    match stats.best_score() {
        Some(score) => println!(
            "   Best score:      {} {}",
            score.to_string().green().bold(),
            if score == 1 { "guess" } else { "guesses" }
        ),
        None => println!("   Best score:      {}", "—".dimmed()),
    }
    println!("   Words played:    {used_words} remembered");
}

/// Print the end-of-game banner
pub fn print_game_over(won: bool, attempts: u32, target: &str) {
    println!();
    if won {
        let performance = match attempts {
            1 => "🏆 Incredible hole-in-one!",
            2 => "⭐ Excellent!",
            3 => "💫 Great!",
            4 => "✨ Good!",
            5 => "👍 Solved!",
            _ => "✓ That was close!",
        };
        println!(
            "{}",
            format!("🎉 Correct! Solved in {attempts} {}.", plural(attempts))
                .green()
                .bold()
        );
        println!("{}", performance.bright_yellow());
    } else {
        println!(
            "{}",
            format!("❌ Out of attempts! The word was {target}.")
                .red()
                .bold()
        );
    }
}

fn plural(attempts: u32) -> &'static str {
    if attempts == 1 { "guess" } else { "guesses" }
}
