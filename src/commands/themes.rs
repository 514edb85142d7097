//! Theme listing command
//!
//! Lists theme names and sizes without revealing any words.

use crate::themes::ThemeSet;
use colored::Colorize;

/// Print the configured themes with their word counts
pub fn run_themes(themes: &ThemeSet) {
    if themes.is_empty() {
        println!("No themes configured.");
        return;
    }

    println!("\n{}", "Available themes".bright_cyan().bold());
    for theme in themes.iter() {
        let count = theme.len();
        let words = if count == 1 { "word" } else { "words" };
        println!(
            "  • {} ({count} {words})",
            theme.name().bright_yellow()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    // Must not panic on either shape of table
    #[test]
    fn listing_handles_empty_and_embedded() {
        run_themes(&ThemeSet::new());
        run_themes(&ThemeSet::embedded());
    }
}
