//! Formatting utilities for terminal output

use crate::core::{Code, Color, Guess, Score};
use crate::palettes::Swatches;
use colored::{ColoredString, Colorize};

/// Peg glyph for a filled slot
pub const PEG: &str = "●";

/// Glyph for an empty slot
pub const EMPTY_SLOT: &str = "·";

/// A single colored peg
///
/// Colors without a swatch fall back to the plain glyph.
#[must_use]
pub fn color_peg(color: &Color, swatches: &Swatches) -> ColoredString {
    match swatches.rgb_for(color) {
        Some((r, g, b)) => PEG.truecolor(r, g, b),
        None => PEG.normal(),
    }
}

/// A code as colored pegs separated by spaces
#[must_use]
pub fn code_pegs(code: &Code, swatches: &Swatches) -> String {
    code.colors()
        .iter()
        .map(|c| color_peg(c, swatches).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The active row, with empty slots shown as dots
#[must_use]
pub fn guess_pegs(guess: &Guess, swatches: &Swatches) -> String {
    guess
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(color) => color_peg(color, swatches).to_string(),
            None => EMPTY_SLOT.bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score as colored feedback pegs, padded with dots for misses
#[must_use]
pub fn score_pegs(score: Score, slots: usize) -> String {
    format!(
        "{}{}{}",
        "●".repeat(score.exact).bright_green(),
        "○".repeat(score.partial).bright_yellow(),
        EMPTY_SLOT.repeat(score.misses(slots)).bright_black()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many attempts have been used
#[must_use]
pub fn attempts_bar(used: usize, max_rows: usize, width: usize) -> String {
    create_progress_bar(used as f64, max_rows as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_pegs_counts() {
        colored::control::set_override(false);
        assert_eq!(score_pegs(Score::new(2, 1), 4), "●●○·");
        assert_eq!(score_pegs(Score::new(0, 0), 3), "···");
        assert_eq!(score_pegs(Score::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn guess_pegs_marks_empty_slots() {
        colored::control::set_override(false);
        let swatches = Swatches::embedded();
        let mut guess = crate::core::Guess::empty(3);
        guess.set(1, Color::new("rose").unwrap());

        assert_eq!(guess_pegs(&guess, &swatches), "· ● ·");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn attempts_bar_half() {
        assert_eq!(attempts_bar(5, 10, 10), "█████░░░░░");
    }
}
