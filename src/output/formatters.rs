//! Formatting utilities for terminal output

use crate::core::ScoreState;

/// The gallows drawing, one frame per wrong guess
///
/// Frame 0 is the empty gallows; the last frame is the complete figure.
/// Calibrated for the default budget of six wrong guesses.
pub const GALLOWS_STAGES: [&str; 7] = [
    r"
   -----
   |   |
       |
       |
       |
       |
---------",
    r"
   -----
   |   |
   O   |
       |
       |
       |
---------",
    r"
   -----
   |   |
   O   |
   |   |
       |
       |
---------",
    r"
   -----
   |   |
   O   |
  /|   |
       |
       |
---------",
    r"
   -----
   |   |
   O   |
  /|\  |
       |
       |
---------",
    r"
   -----
   |   |
   O   |
  /|\  |
  /    |
       |
---------",
    r"
   -----
   |   |
   O   |
  /|\  |
  / \  |
       |
---------",
];

/// Gallows frame for a stage index, clamped to the drawing table
#[must_use]
pub fn stage_art(stage: usize) -> &'static str {
    GALLOWS_STAGES[stage.min(GALLOWS_STAGES.len() - 1)]
}

/// Format the wrong-guess list in the order the guesses were made
#[must_use]
pub fn wrong_letters_line(wrong: &[char]) -> String {
    let letters: Vec<String> = wrong.iter().map(char::to_string).collect();
    format!("Wrong letters: {}", letters.join(" "))
}

/// Format the session score summary
#[must_use]
pub fn score_line(score: &ScoreState) -> String {
    format!(
        "Score: {} | Diamonds: {}",
        score.total_score(),
        score.diamonds()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_art_indexes_table() {
        assert_eq!(stage_art(0), GALLOWS_STAGES[0]);
        assert_eq!(stage_art(6), GALLOWS_STAGES[6]);
    }

    #[test]
    fn stage_art_clamps_past_table() {
        assert_eq!(stage_art(99), GALLOWS_STAGES[6]);
    }

    #[test]
    fn stages_grow_monotonically() {
        // Each frame adds ink, never removes it
        for pair in GALLOWS_STAGES.windows(2) {
            let before = pair[0].chars().filter(|c| !c.is_whitespace()).count();
            let after = pair[1].chars().filter(|c| !c.is_whitespace()).count();
            assert!(after >= before);
        }
    }

    #[test]
    fn wrong_letters_line_preserves_order() {
        assert_eq!(
            wrong_letters_line(&['X', 'Y', 'Z']),
            "Wrong letters: X Y Z"
        );
        assert_eq!(wrong_letters_line(&[]), "Wrong letters: ");
    }

    #[test]
    fn score_line_formats_both_counters() {
        let mut score = ScoreState::new();
        score.record_win(28);
        assert_eq!(score_line(&score), "Score: 28 | Diamonds: 1");
    }
}
