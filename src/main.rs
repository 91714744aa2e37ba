//! Wordle Game - CLI
//!
//! Single-player Wordle with persistent statistics and a used-word history
//! that avoids repeating targets.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_play, run_stats},
    engine::GameEngine,
    store::JsonFileStore,
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Single-player Wordle with persistent statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of the save file for statistics and word history
    #[arg(short, long, global = true, default_value = "wordle_stats.json")]
    data_file: String,

    /// Custom word list file (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Show saved statistics
    Stats,
}

/// Load the target word list based on the -w flag
fn load_wordlist(wordlist: Option<&str>) -> Result<WordList> {
    let list = match wordlist {
        None => WordList::embedded(),
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list from {path}"))?,
    };

    ensure!(
        !list.is_empty(),
        "word list contains no valid 5-letter words"
    );
    Ok(list)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut store = JsonFileStore::new(&cli.data_file);
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = load_wordlist(cli.wordlist.as_deref())?;
            let engine = GameEngine::new(words, store);
            run_play(engine).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            run_stats(&mut store);
            Ok(())
        }
    }
}
