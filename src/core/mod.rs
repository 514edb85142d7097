//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with no UI dependencies.
//! All types here are pure, testable, and side-effect free on failure.

mod round;
mod score;
mod word;

pub use round::{GuessError, GuessOutcome, MASK_CHAR, Round, RoundStatus};
pub use score::ScoreState;
pub use word::{WordEntry, WordError};
