//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::Code;
use crate::engine::{Engine, GameConfig, GameState, Outcome};
use crate::error::GameError;
use crate::output::formatters::score_pegs;
use crate::output::{describe_error, print_board, print_hint, print_outcome, print_palette};
use crate::palettes::Swatches;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// What the game loop should do after a finished game
enum AfterGame {
    PlayAgain,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(
    engine: &mut Engine<R>,
    config: GameConfig,
    swatches: &Swatches,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Mastermind - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Break the {}-color code in {} attempts or fewer.",
        config.slots(),
        config.max_rows()
    );
    println!("Type a guess as color names or palette numbers, e.g. '1 2 3 4'.\n");
    println!("  - {} exact match (right color, right slot)", "●".bright_green());
    println!("  - {} partial match (right color, wrong slot)", "○".bright_yellow());
    println!("\nCommands: 'hint', 'giveup', 'new', 'quit'\n");
    print_palette(swatches);

    let mut state = engine.new_game(config);
    let mut games = 0usize;
    let mut wins = 0usize;

    loop {
        println!("\n{}", "─".repeat(60));
        print_board(&state, swatches);
        println!("{}", "─".repeat(60));

        let Some(input) = get_user_input("Guess or command")? else {
            break;
        };

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                engine.restart(&mut state);
                println!("\n🔄 New game started!");
            }
            "hint" | "h" => match engine.request_hint(&state) {
                Ok(hint) => print_hint(&hint, swatches),
                Err(e) => println!("❌ {}", describe_error(&e)),
            },
            "giveup" | "give up" | "g" => {
                if let Err(e) = state.give_up() {
                    println!("❌ {}", describe_error(&e));
                }
            }
            "palette" | "p" => print_palette(swatches),
            _ => submit_line(&mut state, &input),
        }

        if state.is_finished() {
            games += 1;
            if state.outcome() == Outcome::Won {
                wins += 1;
            }

            print_board(&state, swatches);
            print_outcome(&state, swatches);
            println!("Games: {games} | Wins: {wins}");

            match ask_play_again()? {
                AfterGame::PlayAgain => {
                    engine.restart(&mut state);
                    println!("\n🔄 New game started!");
                }
                AfterGame::Quit => break,
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Parse a typed guess, fill the active row with it and submit
fn submit_line(state: &mut GameState, input: &str) {
    let Some(code) = Code::parse(input, state.palette()) else {
        println!("❌ Unknown color or command. Use names or numbers 1-{}", state.palette().len());
        return;
    };

    if code.len() != state.slots() {
        println!(
            "❌ Enter exactly {} colors (got {})",
            state.slots(),
            code.len()
        );
        return;
    }

    let result = code
        .colors()
        .iter()
        .enumerate()
        .try_for_each(|(slot, color)| state.set_slot(slot, color.clone()))
        .and_then(|()| state.submit_guess());

    match result {
        Ok(score) => println!(
            "\n{}  {}",
            score_pegs(score, state.slots()),
            score.to_string().bright_white()
        ),
        Err(GameError::GameOver) => println!("❌ The game is over. Type 'new' to play again."),
        Err(e) => println!("❌ {}", describe_error(&e)),
    }
}

fn ask_play_again() -> Result<AfterGame, String> {
    let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();

    match answer.to_lowercase().as_str() {
        "yes" | "y" => Ok(AfterGame::PlayAgain),
        _ => Ok(AfterGame::Quit),
    }
}

/// Get user input with a prompt
///
/// Returns `None` once stdin is closed.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn state() -> GameState {
        let secret = Code::new(
            ["rose", "yellow", "green", "blue"]
                .iter()
                .map(|n| Color::new(n).unwrap())
                .collect(),
        );
        GameState::with_secret(GameConfig::default(), secret).unwrap()
    }

    #[test]
    fn typed_guess_is_submitted() {
        let mut state = state();
        submit_line(&mut state, "blue, green, yellow, rose");

        assert_eq!(state.attempts_used(), 1);
        assert_eq!(state.current_turn(), 1);
    }

    #[test]
    fn digits_win_the_game() {
        let mut state = state();
        submit_line(&mut state, "1 2 3 4");

        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn wrong_length_is_not_submitted() {
        let mut state = state();
        submit_line(&mut state, "1 2 3");

        assert_eq!(state.attempts_used(), 0);
        assert_eq!(state.current_guess().filled(), 0);
    }

    #[test]
    fn unknown_color_is_not_submitted() {
        let mut state = state();
        submit_line(&mut state, "1 2 3 purple");

        assert_eq!(state.attempts_used(), 0);
    }

    #[test]
    fn finished_game_rejects_guesses() {
        let mut state = state();
        state.give_up().unwrap();
        submit_line(&mut state, "1 2 3 4");

        assert_eq!(state.outcome(), Outcome::GivenUp);
        assert_eq!(state.attempts_used(), 0);
    }
}
