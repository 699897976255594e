//! Scripted game command
//!
//! Plays a seeded game from a list of guesses and returns its record.

use crate::core::Code;
use crate::engine::{Engine, GameConfig};
use crate::output::GameRecord;
use tracing::debug;

/// Configuration for a scripted game
pub struct ReplayConfig {
    pub seed: u64,
    pub guesses: Vec<String>,
    pub hints: usize,
    pub give_up: bool,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(seed: u64, guesses: Vec<String>) -> Self {
        Self {
            seed,
            guesses,
            hints: 0,
            give_up: false,
        }
    }
}

/// Play the scripted guesses and capture the final state
///
/// Hints are requested before the first guess. `give_up` is applied after the
/// last guess if the game is still running.
///
/// # Errors
///
/// Returns an error if:
/// - A guess contains an unknown color or has the wrong length
/// - Guesses remain after the game has already ended
pub fn replay(config: ReplayConfig, game: GameConfig) -> Result<GameRecord, String> {
    let mut engine = Engine::seeded(config.seed);
    let mut state = engine.new_game(game);
    let mut hints = Vec::with_capacity(config.hints);

    for _ in 0..config.hints {
        hints.push(engine.request_hint(&state).map_err(|e| e.to_string())?);
    }

    for (i, text) in config.guesses.iter().enumerate() {
        let code = Code::parse(text, state.palette())
            .ok_or_else(|| format!("Guess {}: unknown color in '{text}'", i + 1))?;

        if code.len() != state.slots() {
            return Err(format!(
                "Guess {}: expected {} colors, got {}",
                i + 1,
                state.slots(),
                code.len()
            ));
        }

        for (slot, color) in code.colors().iter().enumerate() {
            state
                .set_slot(slot, color.clone())
                .map_err(|e| format!("Guess {}: {e}", i + 1))?;
        }

        let score = state
            .submit_guess()
            .map_err(|e| format!("Guess {}: {e}", i + 1))?;
        debug!(guess = i + 1, %score, "replayed guess");
    }

    if config.give_up && !state.is_finished() {
        state.give_up().map_err(|e| e.to_string())?;
    }

    Ok(GameRecord::capture(&state, hints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Outcome;

    #[test]
    fn replay_without_guesses() {
        let record = replay(ReplayConfig::new(1, vec![]), GameConfig::default()).unwrap();

        assert_eq!(record.outcome, Outcome::InProgress);
        assert_eq!(record.current_turn, 0);
        assert!(record.secret.is_none());
    }

    #[test]
    fn replay_is_deterministic() {
        let guesses = vec!["1 2 3 4".to_string(), "5 6 1 2".to_string()];

        let a = replay(ReplayConfig::new(99, guesses.clone()), GameConfig::default()).unwrap();
        let b = replay(ReplayConfig::new(99, guesses), GameConfig::default()).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.current_turn, b.current_turn);
    }

    #[test]
    fn replay_give_up_reveals_secret() {
        let mut config = ReplayConfig::new(5, vec!["1 1 1 1".to_string()]);
        config.give_up = true;

        let record = replay(config, GameConfig::default()).unwrap();

        assert_eq!(record.outcome, Outcome::GivenUp);
        assert!(record.finished);
        assert_eq!(record.secret.as_ref().map(Code::len), Some(4));
        assert!(record.history[0].is_some());
    }

    #[test]
    fn replay_winning_with_revealed_secret() {
        // Learn the secret for this seed, then replay it as the first guess
        let mut scout = ReplayConfig::new(17, vec![]);
        scout.give_up = true;
        let secret = replay(scout, GameConfig::default())
            .unwrap()
            .secret
            .unwrap();

        let record = replay(
            ReplayConfig::new(17, vec![secret.to_string()]),
            GameConfig::default(),
        )
        .unwrap();

        assert_eq!(record.outcome, Outcome::Won);
        assert_eq!(record.current_turn, 0);
        assert_eq!(record.secret, Some(secret));
    }

    #[test]
    fn replay_hints_match_secret() {
        let mut config = ReplayConfig::new(8, vec![]);
        config.hints = 3;
        config.give_up = true;

        let record = replay(config, GameConfig::default()).unwrap();
        let secret = record.secret.unwrap();

        assert_eq!(record.hints.len(), 3);
        for hint in &record.hints {
            assert_eq!(hint.color, secret.colors()[hint.slot]);
        }
    }

    #[test]
    fn replay_rejects_bad_guesses() {
        let wrong_length = replay(
            ReplayConfig::new(1, vec!["1 2".to_string()]),
            GameConfig::default(),
        );
        assert_eq!(
            wrong_length.err().unwrap(),
            "Guess 1: expected 4 colors, got 2"
        );

        let unknown = replay(
            ReplayConfig::new(1, vec!["1 2 3 pink".to_string()]),
            GameConfig::default(),
        );
        assert!(unknown.is_err());
    }

    #[test]
    fn replay_rejects_guesses_after_game_over() {
        let palette = crate::palettes::default_palette();
        let one_row = GameConfig::new(palette, 4, 1).unwrap();
        let guesses = vec!["1 1 1 1".to_string(), "2 2 2 2".to_string()];

        // Either the first guess wins or it exhausts the only row
        let err = replay(ReplayConfig::new(3, guesses), one_row).err().unwrap();
        assert_eq!(err, "Guess 2: The game is already over");
    }
}
