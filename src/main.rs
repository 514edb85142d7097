//! Hangman - CLI
//!
//! Themed hangman with TUI and CLI play modes over a pure engine core.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_simple, run_themes},
    engine::{DEFAULT_MAX_WRONG, Game, GameConfig},
    themes::{ThemeSet, loader::load_from_file},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Themed hangman: guess the word before the gallows drawing is complete",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme file (lines of `theme<TAB>word<TAB>hint`) replacing the embedded themes
    #[arg(short = 'w', long, global = true)]
    themes_file: Option<PathBuf>,

    /// Seed word selection for reproducible rounds
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Wrong guesses allowed before a round is lost
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_WRONG)]
    max_wrong: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text, no TUI)
    Simple {
        /// Play this theme only, skipping the theme picker
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// List the configured themes
    Themes,
}

/// Load the theme table from the -w flag or fall back to the embedded bank
fn load_themes(themes_file: Option<&PathBuf>) -> Result<ThemeSet> {
    match themes_file {
        Some(path) => {
            let themes = load_from_file(path)?;
            anyhow::ensure!(
                !themes.is_empty(),
                "no valid themes in {}",
                path.display()
            );
            Ok(themes)
        }
        None => Ok(ThemeSet::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    anyhow::ensure!(cli.max_wrong >= 1, "--max-wrong must be at least 1");

    let themes = load_themes(cli.themes_file.as_ref())?;
    let config = GameConfig {
        max_wrong: cli.max_wrong,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(themes, config, cli.seed),
        Commands::Simple { theme } => {
            run_simple_command(themes, config, cli.seed, theme.as_deref())
        }
        Commands::Themes => {
            run_themes(&themes);
            Ok(())
        }
    }
}

fn build_game(themes: ThemeSet, config: GameConfig, seed: Option<u64>) -> Game {
    match seed {
        Some(seed) => Game::with_seed(themes, config, seed),
        None => Game::with_config(themes, config),
    }
}

fn run_play_command(themes: ThemeSet, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(build_game(themes, config, seed));
    run_tui(app)
}

fn run_simple_command(
    themes: ThemeSet,
    config: GameConfig,
    seed: Option<u64>,
    theme: Option<&str>,
) -> Result<()> {
    let mut game = build_game(themes, config, seed);
    run_simple(&mut game, theme).map_err(|e| anyhow::anyhow!(e))
}
