//! Display functions for the simple CLI mode

use super::formatters::{score_line, stage_art, wrong_letters_line};
use crate::core::{Round, ScoreState};
use colored::Colorize;

/// Print the round as the player sees it between guesses
pub fn print_round(round: &Round, score: &ScoreState) {
    println!("{}", stage_art(round.stage()).bright_white());
    println!("\n  {}", round.masked_word().bright_yellow().bold());
    println!("  Hint: {}", round.hint().bright_cyan());
    println!("  {}", wrong_letters_line(round.wrong_letters()).red());
    println!("  {}", score_line(score).bright_black());
    println!(
        "  Wrong guesses left: {}",
        round.max_wrong() - round.wrong_count()
    );
}

/// Print the victory banner with the score breakdown
pub fn print_win_banner(round: &Round, round_score: u64, score: &ScoreState) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉 ✨  Y O U   W O N !  ✨ 🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  The word was {}",
        round.word().bright_yellow().bold()
    );
    println!(
        "  Round score: {}  ({} letters, {} wrong guesses)",
        round_score.to_string().bright_yellow().bold(),
        round.word().len(),
        round.wrong_count()
    );
    println!(
        "  {} | 💎 {}",
        format!("Total score: {}", score.total_score()).bright_white(),
        score.diamonds().to_string().bright_cyan()
    );
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Print the defeat banner and reveal the word
pub fn print_loss_banner(round: &Round) {
    println!("{}", stage_art(round.stage()).bright_red());
    println!("\n{}", "═".repeat(60).red());
    println!("{}", "    💀  G A M E   O V E R  💀    ".bright_red().bold());
    println!("{}", "═".repeat(60).red());
    println!(
        "\n  The word was {}",
        round.word().bright_yellow().bold()
    );
}

/// Print the rules of the game
pub fn print_rules() {
    println!("\n{}", "How to play".bright_cyan().bold());
    println!("  1. A hidden word is picked from the theme you choose.");
    println!("  2. Guess it one letter at a time; correct letters are revealed.");
    println!("  3. Each wrong letter adds a piece to the gallows drawing.");
    println!("  4. Reveal every letter before the drawing is complete to win.");
    println!("  5. Wins earn points and a diamond; fewer mistakes, more points.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    // Smoke tests: the printers must not panic on fresh or terminal rounds
    #[test]
    fn printers_handle_fresh_round() {
        let round = Round::new(WordEntry::new("lion", "hint").unwrap(), 6);
        print_round(&round, &ScoreState::new());
        print_rules();
    }

    #[test]
    fn printers_handle_terminal_round() {
        let mut round = Round::new(WordEntry::new("cat", "hint").unwrap(), 2);
        round.apply('x').unwrap();
        round.apply('y').unwrap();
        print_loss_banner(&round);

        let mut won = Round::new(WordEntry::new("cat", "hint").unwrap(), 6);
        for letter in ['c', 'a', 't'] {
            won.apply(letter).unwrap();
        }
        let mut score = ScoreState::new();
        score.record_win(won.round_score());
        print_win_banner(&won, won.round_score(), &score);
    }
}
