//! Themed word banks
//!
//! Provides the embedded default themes compiled into the binary and a
//! loader for custom theme files.

mod embedded;
pub mod loader;

pub use embedded::{
    ANIMALS, ANIMALS_COUNT, EMBEDDED, SPORTS, SPORTS_COUNT, TECHNOLOGY, TECHNOLOGY_COUNT,
};

use crate::core::WordEntry;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for theme configuration and lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The requested theme is not in the configured table
    UnknownTheme(String),
    /// A theme must contain at least one word
    EmptyTheme(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTheme(name) => write!(f, "Unknown theme '{name}'"),
            Self::EmptyTheme(name) => write!(f, "Theme '{name}' has no words"),
        }
    }
}

impl std::error::Error for ThemeError {}

/// A named category bundling an ordered list of word entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    entries: Vec<WordEntry>,
}

impl Theme {
    /// Create a theme from a name and its entries
    ///
    /// # Errors
    /// Returns `ThemeError::EmptyTheme` if `entries` is empty, so a theme
    /// can always produce a word.
    pub fn new(name: impl Into<String>, entries: Vec<WordEntry>) -> Result<Self, ThemeError> {
        let name = name.into();
        if entries.is_empty() {
            return Err(ThemeError::EmptyTheme(name));
        }
        Ok(Self { name, entries })
    }

    /// The theme name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entries in their configured order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a constructed theme
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The theme table: name lookup plus stable display order
///
/// Insertion order is preserved so front-ends list themes the way the
/// configuration defined them.
#[derive(Debug, Clone, Default)]
pub struct ThemeSet {
    themes: Vec<Theme>,
    index: FxHashMap<String, usize>,
}

impl ThemeSet {
    /// An empty theme table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default table built from the embedded theme data
    ///
    /// Entries that fail validation are skipped, matching the loader.
    #[must_use]
    pub fn embedded() -> Self {
        let mut set = Self::new();
        for &(name, table) in EMBEDDED {
            let entries: Vec<WordEntry> = table
                .iter()
                .filter_map(|&(word, hint)| WordEntry::new(word, hint).ok())
                .collect();
            if let Ok(theme) = Theme::new(name, entries) {
                set.insert(theme);
            }
        }
        set
    }

    /// Add a theme, replacing any existing theme with the same name
    pub fn insert(&mut self, theme: Theme) {
        if let Some(&pos) = self.index.get(theme.name()) {
            self.themes[pos] = theme;
        } else {
            self.index.insert(theme.name().to_string(), self.themes.len());
            self.themes.push(theme);
        }
    }

    /// Look up a theme by name
    ///
    /// # Errors
    /// Returns `ThemeError::UnknownTheme` if the name is not configured.
    pub fn get(&self, name: &str) -> Result<&Theme, ThemeError> {
        self.index
            .get(name)
            .map(|&pos| &self.themes[pos])
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))
    }

    /// Themes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    /// Theme names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(Theme::name)
    }

    /// Number of themes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the table holds no themes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> WordEntry {
        WordEntry::new(word, "hint").unwrap()
    }

    #[test]
    fn theme_rejects_empty_entries() {
        assert!(matches!(
            Theme::new("Empty", Vec::new()),
            Err(ThemeError::EmptyTheme(name)) if name == "Empty"
        ));
    }

    #[test]
    fn lookup_by_name() {
        let mut set = ThemeSet::new();
        set.insert(Theme::new("Animals", vec![entry("lion")]).unwrap());

        let theme = set.get("Animals").unwrap();
        assert_eq!(theme.name(), "Animals");
        assert_eq!(theme.len(), 1);
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let set = ThemeSet::embedded();
        assert!(matches!(
            set.get("Nonexistent"),
            Err(ThemeError::UnknownTheme(name)) if name == "Nonexistent"
        ));
    }

    #[test]
    fn insertion_order_preserved() {
        let mut set = ThemeSet::new();
        set.insert(Theme::new("Zoo", vec![entry("lion")]).unwrap());
        set.insert(Theme::new("Art", vec![entry("canvas")]).unwrap());

        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["Zoo", "Art"]);
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut set = ThemeSet::new();
        set.insert(Theme::new("Animals", vec![entry("lion")]).unwrap());
        set.insert(Theme::new("Animals", vec![entry("cat"), entry("dog")]).unwrap());

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("Animals").unwrap().len(), 2);
    }

    #[test]
    fn embedded_themes_present() {
        let set = ThemeSet::embedded();
        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["Animals", "Technology", "Sports"]);

        for theme in set.iter() {
            assert!(!theme.is_empty());
            for entry in theme.entries() {
                assert!(entry.word().chars().all(|c| c.is_ascii_uppercase()));
                assert!(!entry.hint().is_empty());
            }
        }
    }

    #[test]
    fn embedded_counts_match_consts() {
        assert_eq!(ANIMALS.len(), ANIMALS_COUNT);
        assert_eq!(TECHNOLOGY.len(), TECHNOLOGY_COUNT);
        assert_eq!(SPORTS.len(), SPORTS_COUNT);
    }
}
