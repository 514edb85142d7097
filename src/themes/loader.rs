//! Theme file loading utilities
//!
//! Custom theme files are plain text, one entry per line:
//! `theme<TAB>word<TAB>hint`. Lines that fail validation are skipped.

use crate::core::WordEntry;
use crate::themes::{Theme, ThemeSet};
use std::fs;
use std::io;
use std::path::Path;

/// Load a theme table from a file
///
/// Themes appear in the order their first entry appears in the file.
/// Invalid lines (wrong column count, unparseable words) are skipped, as
/// are themes that end up with no valid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::themes::loader::load_from_file;
///
/// let themes = load_from_file("my_themes.tsv").unwrap();
/// println!("Loaded {} themes", themes.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<ThemeSet> {
    let content = fs::read_to_string(path)?;
    Ok(themes_from_str(&content))
}

/// Parse a theme table from TSV text
///
/// # Examples
/// ```
/// use hangman::themes::loader::themes_from_str;
///
/// let themes = themes_from_str("Animals\tlion\tThe king of the jungle.");
/// assert_eq!(themes.len(), 1);
/// ```
#[must_use]
pub fn themes_from_str(content: &str) -> ThemeSet {
    // Group entries by theme name, first appearance fixes the order
    let mut order: Vec<String> = Vec::new();
    let mut grouped: Vec<Vec<WordEntry>> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut columns = trimmed.splitn(3, '\t');
        let (Some(name), Some(word), Some(hint)) =
            (columns.next(), columns.next(), columns.next())
        else {
            continue;
        };

        let Ok(entry) = WordEntry::new(word.trim(), hint.trim()) else {
            continue;
        };

        match order.iter().position(|n| n == name) {
            Some(pos) => grouped[pos].push(entry),
            None => {
                order.push(name.to_string());
                grouped.push(vec![entry]);
            }
        }
    }

    let mut set = ThemeSet::new();
    for (name, entries) in order.into_iter().zip(grouped) {
        if let Ok(theme) = Theme::new(name, entries) {
            set.insert(theme);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grouped_themes() {
        let content = "Animals\tlion\tThe king of the jungle.\n\
                       Tech\trobot\tA programmable machine.\n\
                       Animals\tcat\tA small pet.\n";
        let themes = themes_from_str(content);

        assert_eq!(themes.len(), 2);
        let names: Vec<&str> = themes.names().collect();
        assert_eq!(names, vec!["Animals", "Tech"]);

        let animals = themes.get("Animals").unwrap();
        assert_eq!(animals.len(), 2);
        assert_eq!(animals.entries()[0].word(), "LION");
        assert_eq!(animals.entries()[1].word(), "CAT");
    }

    #[test]
    fn skips_invalid_lines() {
        let content = "Animals\tlion\tThe king of the jungle.\n\
                       missing columns\n\
                       Animals\tnot a word\thas a space\n\
                       # a comment\n";
        let themes = themes_from_str(content);

        assert_eq!(themes.len(), 1);
        assert_eq!(themes.get("Animals").unwrap().len(), 1);
    }

    #[test]
    fn skips_themes_with_no_valid_entries() {
        let content = "Broken\t123\tdigits only\n";
        let themes = themes_from_str(content);
        assert!(themes.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(themes_from_str("").is_empty());
        assert!(themes_from_str("\n\n# comments only\n").is_empty());
    }
}
