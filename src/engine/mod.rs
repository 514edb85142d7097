//! Game engine
//!
//! Owns the word bank, the live round, guess processing, and scoring.

mod game;

pub use game::{DEFAULT_MAX_WRONG, Game, GameConfig};
