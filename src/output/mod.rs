//! Terminal output formatting
//!
//! Display utilities for the CLI mode: gallows stage art, masked-word and
//! score lines, win/loss banners. The engine owns none of this.

pub mod display;
pub mod formatters;

pub use display::{print_loss_banner, print_round, print_rules, print_win_banner};
pub use formatters::{GALLOWS_STAGES, score_line, stage_art, wrong_letters_line};
