//! Display functions for command results

use super::formatters::{attempts_bar, code_pegs, color_peg, guess_pegs, score_pegs};
use crate::commands::ScoreResult;
use crate::engine::{GameState, Hint, Outcome};
use crate::palettes::Swatches;
use colored::Colorize;

/// Print the palette with its digit shortcuts
pub fn print_palette(swatches: &Swatches) {
    let entries: Vec<String> = swatches
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {} {}", i + 1, color_peg(&s.color, swatches), s.color))
        .collect();

    println!("Palette: {}", entries.join("   "));
}

/// Print the result of scoring one guess against a secret
pub fn print_score_result(result: &ScoreResult, swatches: &Swatches) {
    let slots = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret: {}  {}", code_pegs(&result.secret, swatches), result.secret);
    println!("Guess:  {}  {}", code_pegs(&result.guess, swatches), result.guess);
    println!("{}", "─".repeat(60).cyan());
    println!(
        "\n{}  {} exact, {} partial",
        score_pegs(result.score, slots),
        result.score.exact.to_string().bright_green().bold(),
        result.score.partial.to_string().bright_yellow().bold()
    );

    if result.score.is_perfect(slots) {
        println!("{}", "✅ Code broken!".green().bold());
    }
}

/// Print submitted rows and the active row
pub fn print_board(state: &GameState, swatches: &Swatches) {
    let slots = state.slots();

    for (i, entry) in state.submitted().enumerate() {
        println!(
            "  {:>2}. {}   {}",
            (i + 1).to_string().bright_black(),
            code_pegs(&entry.guess, swatches),
            score_pegs(entry.score, slots)
        );
    }

    if !state.is_finished() {
        println!(
            "  {:>2}. {}",
            (state.current_turn() + 1).to_string().bright_cyan(),
            guess_pegs(state.current_guess(), swatches)
        );
    }

    println!(
        "\n  Attempts: [{}] {}/{}",
        attempts_bar(state.attempts_used(), state.max_rows(), 20).cyan(),
        state.attempts_used(),
        state.max_rows()
    );
}

/// Print a disclosed hint
pub fn print_hint(hint: &Hint, swatches: &Swatches) {
    println!(
        "💡 Slot {} holds {} {}",
        hint.slot + 1,
        color_peg(&hint.color, swatches),
        hint.color.to_string().bold()
    );
}

/// Print the end-of-game banner and the secret
pub fn print_outcome(state: &GameState, swatches: &Swatches) {
    let attempts = state.attempts_used();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match state.outcome() {
        Outcome::Won => println!(
            "{}",
            format!(
                "🎉 Code broken in {attempts} {}!",
                if attempts == 1 { "attempt" } else { "attempts" }
            )
            .bright_green()
            .bold()
        ),
        Outcome::Lost => println!("{}", "❌ Out of attempts.".red().bold()),
        Outcome::GivenUp => println!("{}", "🏳  You gave up.".yellow().bold()),
        Outcome::InProgress => return,
    }

    if let Some(secret) = state.revealed_secret() {
        println!("The code was: {}  {}", code_pegs(secret, swatches), secret);
    }
    println!("{}", "═".repeat(60).bright_cyan());
}
