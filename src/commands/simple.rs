//! Simple interactive CLI mode
//!
//! Text-based play loop without TUI

use crate::core::{GuessError, GuessOutcome};
use crate::engine::Game;
use crate::output::{print_loss_banner, print_round, print_rules, print_win_banner};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if the
/// configured theme table is empty.
pub fn run_simple(game: &mut Game, theme: Option<&str>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Hangman - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝");

    if game.themes().is_empty() {
        return Err("No themes configured".to_string());
    }

    print_rules();
    println!("\nCommands: 'quit' to exit, 'new' to pick another theme\n");

    loop {
        let theme_name = match theme {
            Some(name) => name.to_string(),
            None => pick_theme(game)?,
        };

        game.start_round(&theme_name)
            .map_err(|e| e.to_string())?;

        match play_round(game)? {
            LoopControl::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LoopControl::NewRound => {}
        }
    }
}

enum LoopControl {
    NewRound,
    Quit,
}

/// Ask the player to choose a theme by number or name
fn pick_theme(game: &Game) -> Result<String, String> {
    println!("Themes:");
    for (i, theme) in game.themes().iter().enumerate() {
        println!("  {}. {} ({} words)", i + 1, theme.name(), theme.len());
    }

    loop {
        let input = get_user_input("Choose a theme")?;

        if let Ok(number) = input.parse::<usize>()
            && let Some(theme) = game.themes().iter().nth(number.wrapping_sub(1))
        {
            return Ok(theme.name().to_string());
        }

        if game.themes().get(&input).is_ok() {
            return Ok(input);
        }

        println!("❌ No such theme. Enter a number or an exact name.\n");
    }
}

fn play_round(game: &mut Game) -> Result<LoopControl, String> {
    loop {
        {
            let round = game.round().ok_or("No round in progress")?;
            println!();
            print_round(round, game.score());
        }

        let input = get_user_input("Guess a letter")?;

        // Single letters are always guesses, so commands are spelled out
        match input.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(LoopControl::Quit),
            "new" => {
                println!("\n🔄 Picking a new round...\n");
                return Ok(LoopControl::NewRound);
            }
            _ => {}
        }

        match game.guess(&input) {
            Ok(GuessOutcome::Hit(letter)) => {
                println!("✅ Good guess! '{letter}' is in the word.");
            }
            Ok(GuessOutcome::Miss(letter)) => {
                println!("❌ Sorry, '{letter}' is not in the word.");
            }
            Ok(GuessOutcome::Won { score }) => {
                let round = game.round().ok_or("No round in progress")?;
                print_win_banner(round, score, game.score());
                return ask_play_again();
            }
            Ok(GuessOutcome::Lost) => {
                let round = game.round().ok_or("No round in progress")?;
                print_loss_banner(round);
                return ask_play_again();
            }
            Err(error @ (GuessError::InvalidInput | GuessError::DuplicateGuess(_))) => {
                println!("⚠️  {error}");
            }
            Err(error) => return Err(error.to_string()),
        }
    }
}

fn ask_play_again() -> Result<LoopControl, String> {
    match get_user_input("\nPlay again? (yes/no)")?
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => Ok(LoopControl::NewRound),
        _ => Ok(LoopControl::Quit),
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
