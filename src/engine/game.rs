//! Game engine
//!
//! `Game` owns the theme table, the live round, the session score, and the
//! random source for word selection. Front-ends hold one `Game` and call
//! into it; every operation is synchronous and total.

use crate::core::{GuessError, GuessOutcome, Round, ScoreState};
use crate::themes::{Theme, ThemeError, ThemeSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong guesses tolerated before a round is lost
    pub max_wrong: usize,
}

/// The reference penalty budget: six wrong guesses, seven drawing stages
pub const DEFAULT_MAX_WRONG: usize = 6;

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong: DEFAULT_MAX_WRONG,
        }
    }
}

/// The hangman engine
///
/// Exactly one round and one score state are live per `Game`. The word for
/// each round is drawn uniformly from the chosen theme; construct with
/// [`Game::with_seed`] to make the draw reproducible.
#[derive(Debug)]
pub struct Game {
    themes: ThemeSet,
    config: GameConfig,
    round: Option<Round>,
    score: ScoreState,
    rng: StdRng,
}

impl Game {
    /// Create an engine over the given themes with the default config
    #[must_use]
    pub fn new(themes: ThemeSet) -> Self {
        Self::with_config(themes, GameConfig::default())
    }

    /// Create an engine with an explicit config, seeded from the OS
    #[must_use]
    pub fn with_config(themes: ThemeSet, config: GameConfig) -> Self {
        Self {
            themes,
            config,
            round: None,
            score: ScoreState::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an engine with a fixed seed for reproducible word selection
    #[must_use]
    pub fn with_seed(themes: ThemeSet, config: GameConfig, seed: u64) -> Self {
        Self {
            themes,
            config,
            round: None,
            score: ScoreState::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Start a new round from the named theme
    ///
    /// Picks one entry uniformly at random, replacing any previous round.
    /// The session score is untouched.
    ///
    /// # Errors
    /// Returns `ThemeError::UnknownTheme` if the theme is not configured;
    /// no round is created or discarded in that case.
    pub fn start_round(&mut self, theme_name: &str) -> Result<&Round, ThemeError> {
        let theme = self.themes.get(theme_name)?;
        let entry = theme.entries()[self.rng.random_range(0..theme.len())].clone();
        Ok(self.round.insert(Round::new(entry, self.config.max_wrong)))
    }

    /// Guess from raw player input
    ///
    /// Accepts exactly one alphabetic character; anything else is
    /// `InvalidInput`. See [`Game::guess_char`] for the rest of the
    /// contract.
    ///
    /// # Errors
    /// As [`Game::guess_char`], plus `InvalidInput` for multi-character
    /// or empty input.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.guess_char(letter),
            _ => Err(GuessError::InvalidInput),
        }
    }

    /// Guess a single letter
    ///
    /// On the transition to won, the round score is credited to the
    /// session score and a diamond is awarded. Rejected guesses change
    /// nothing, in the round or the score.
    ///
    /// # Errors
    /// `NoRound` before the first `start_round`; otherwise as
    /// [`Round::apply`].
    pub fn guess_char(&mut self, letter: char) -> Result<GuessOutcome, GuessError> {
        let round = self.round.as_mut().ok_or(GuessError::NoRound)?;
        let outcome = round.apply(letter)?;

        if let GuessOutcome::Won { score } = outcome {
            self.score.record_win(score);
        }

        Ok(outcome)
    }

    /// The live round, if one has been started
    #[inline]
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The session score
    #[inline]
    #[must_use]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// The configured theme table
    #[inline]
    #[must_use]
    pub fn themes(&self) -> &ThemeSet {
        &self.themes
    }

    /// The engine configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Convenience lookup for front-ends
    ///
    /// # Errors
    /// Returns `ThemeError::UnknownTheme` if the theme is not configured.
    pub fn theme(&self, name: &str) -> Result<&Theme, ThemeError> {
        self.themes.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RoundStatus, WordEntry};

    fn single_word_game(word: &str) -> Game {
        let mut themes = ThemeSet::new();
        let entries = vec![WordEntry::new(word, "hint").unwrap()];
        themes.insert(Theme::new("Test", entries).unwrap());
        Game::with_seed(themes, GameConfig::default(), 7)
    }

    #[test]
    fn start_round_unknown_theme() {
        let mut game = single_word_game("lion");
        assert!(matches!(
            game.start_round("Nonexistent"),
            Err(ThemeError::UnknownTheme(name)) if name == "Nonexistent"
        ));
        // No round was created
        assert!(game.round().is_none());
    }

    #[test]
    fn start_round_initial_state() {
        let mut game = single_word_game("lion");
        let round = game.start_round("Test").unwrap();

        assert_eq!(round.status(), RoundStatus::InProgress);
        assert!(round.guessed_letters().is_empty());
        assert!(round.wrong_letters().is_empty());
        assert_eq!(round.hint(), "hint");
    }

    #[test]
    fn start_round_picks_from_theme() {
        let mut themes = ThemeSet::new();
        let entries = vec![
            WordEntry::new("lion", "a").unwrap(),
            WordEntry::new("cat", "b").unwrap(),
            WordEntry::new("dog", "c").unwrap(),
        ];
        themes.insert(Theme::new("Animals", entries.clone()).unwrap());
        let mut game = Game::with_seed(themes, GameConfig::default(), 11);

        for _ in 0..20 {
            let word = game.start_round("Animals").unwrap().word().to_string();
            assert!(entries.iter().any(|e| e.word() == word));
        }
    }

    #[test]
    fn every_embedded_theme_serves_its_own_words() {
        let mut game = Game::with_seed(ThemeSet::embedded(), GameConfig::default(), 5);
        let names: Vec<String> = game.themes().names().map(String::from).collect();

        for name in names {
            let word = game.start_round(&name).unwrap().word().to_string();
            let theme = game.theme(&name).unwrap();
            assert!(
                theme.entries().iter().any(|e| e.word() == word),
                "'{word}' is not in theme '{name}'"
            );
        }
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let make = || {
            let mut themes = ThemeSet::new();
            let entries = vec![
                WordEntry::new("lion", "a").unwrap(),
                WordEntry::new("cat", "b").unwrap(),
                WordEntry::new("dog", "c").unwrap(),
                WordEntry::new("owl", "d").unwrap(),
            ];
            themes.insert(Theme::new("Animals", entries).unwrap());
            Game::with_seed(themes, GameConfig::default(), 42)
        };

        let mut game1 = make();
        let mut game2 = make();
        for _ in 0..10 {
            let word1 = game1.start_round("Animals").unwrap().word().to_string();
            let word2 = game2.start_round("Animals").unwrap().word().to_string();
            assert_eq!(word1, word2);
        }
    }

    #[test]
    fn guess_before_start_round() {
        let mut game = single_word_game("lion");
        assert_eq!(game.guess("a"), Err(GuessError::NoRound));
    }

    #[test]
    fn guess_rejects_bad_input_shape() {
        let mut game = single_word_game("lion");
        game.start_round("Test").unwrap();

        assert_eq!(game.guess("AB"), Err(GuessError::InvalidInput));
        assert_eq!(game.guess("5"), Err(GuessError::InvalidInput));
        assert_eq!(game.guess(""), Err(GuessError::InvalidInput));

        let round = game.round().unwrap();
        assert!(round.guessed_letters().is_empty());
        assert!(round.wrong_letters().is_empty());
    }

    #[test]
    fn win_credits_score_and_diamond() {
        let mut game = single_word_game("lion");
        game.start_round("Test").unwrap();

        for letter in ["l", "i", "o"] {
            assert!(matches!(game.guess(letter), Ok(GuessOutcome::Hit(_))));
        }
        assert_eq!(game.guess("n"), Ok(GuessOutcome::Won { score: 28 }));

        assert_eq!(game.score().total_score(), 28);
        assert_eq!(game.score().diamonds(), 1);
        assert_eq!(game.round().unwrap().status(), RoundStatus::Won);
    }

    #[test]
    fn loss_leaves_score_unchanged() {
        let mut game = single_word_game("cat");
        game.start_round("Test").unwrap();

        for letter in ["x", "y", "z", "q", "w"] {
            assert!(matches!(game.guess(letter), Ok(GuessOutcome::Miss(_))));
        }
        assert_eq!(game.guess("e"), Ok(GuessOutcome::Lost));

        assert_eq!(game.score().total_score(), 0);
        assert_eq!(game.score().diamonds(), 0);
        let round = game.round().unwrap();
        assert_eq!(round.wrong_letters(), &['X', 'Y', 'Z', 'Q', 'W', 'E']);
    }

    #[test]
    fn post_terminal_guess_leaves_score_unchanged() {
        let mut game = single_word_game("cat");
        game.start_round("Test").unwrap();
        for letter in ["c", "a", "t"] {
            game.guess(letter).unwrap();
        }
        let total = game.score().total_score();

        assert_eq!(game.guess("z"), Err(GuessError::RoundFinished));
        assert_eq!(game.score().total_score(), total);
        assert_eq!(game.score().diamonds(), 1);
    }

    #[test]
    fn score_persists_across_rounds() {
        let mut game = single_word_game("cat");
        game.start_round("Test").unwrap();
        for letter in ["c", "a", "t"] {
            game.guess(letter).unwrap();
        }
        assert_eq!(game.score().total_score(), 21);

        // Next round replaces the old one without touching the score
        game.start_round("Test").unwrap();
        assert_eq!(game.round().unwrap().status(), RoundStatus::InProgress);
        assert_eq!(game.score().total_score(), 21);
        assert_eq!(game.score().diamonds(), 1);

        for letter in ["c", "a", "t"] {
            game.guess(letter).unwrap();
        }
        assert_eq!(game.score().total_score(), 42);
        assert_eq!(game.score().diamonds(), 2);
    }

    #[test]
    fn custom_budget_scales_scoring() {
        let mut themes = ThemeSet::new();
        themes.insert(
            Theme::new("Test", vec![WordEntry::new("cat", "hint").unwrap()]).unwrap(),
        );
        let mut game = Game::with_seed(themes, GameConfig { max_wrong: 3 }, 1);
        game.start_round("Test").unwrap();

        game.guess("x").unwrap();
        for letter in ["c", "a"] {
            game.guess(letter).unwrap();
        }
        // 3 letters * (3 + 1 - 1 wrong) = 9
        assert_eq!(game.guess("t"), Ok(GuessOutcome::Won { score: 9 }));
        assert_eq!(game.score().total_score(), 9);
    }
}
