//! Structured game record
//!
//! Snapshot of a [`GameState`] for scripted runs and test harnesses. The
//! secret is only included once the game has ended.

use crate::core::{Code, Guess, Palette};
use crate::engine::{GameState, HistoryEntry, Hint, Outcome};
use serde::Serialize;

/// Serializable view of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub palette: Palette,
    pub slots: usize,
    pub max_rows: usize,
    pub current_turn: usize,
    pub current_guess: Guess,
    pub history: Vec<Option<HistoryEntry>>,
    pub outcome: Outcome,
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<Code>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Hint>,
}

impl GameRecord {
    /// Snapshot a game along with the hints handed out during it
    #[must_use]
    pub fn capture(state: &GameState, hints: Vec<Hint>) -> Self {
        Self {
            palette: state.palette().clone(),
            slots: state.slots(),
            max_rows: state.max_rows(),
            current_turn: state.current_turn(),
            current_guess: state.current_guess().clone(),
            history: state.history().to_vec(),
            outcome: state.outcome(),
            finished: state.is_finished(),
            secret: state.revealed_secret().cloned(),
            hints,
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error only if serialization itself fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&GameState> for GameRecord {
    fn from(state: &GameState) -> Self {
        Self::capture(state, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::engine::GameConfig;
    use serde_json::{Value, json};

    fn game() -> GameState {
        let palette = Palette::new(vec![
            Color::new("red").unwrap(),
            Color::new("blue").unwrap(),
        ])
        .unwrap();
        let config = GameConfig::new(palette, 2, 3).unwrap();
        let secret = Code::new(vec![Color::new("red").unwrap(), Color::new("blue").unwrap()]);
        GameState::with_secret(config, secret).unwrap()
    }

    #[test]
    fn record_hides_secret_while_in_progress() {
        let record = GameRecord::from(&game());
        let value: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        assert_eq!(value["outcome"], "in_progress");
        assert_eq!(value["finished"], false);
        assert!(value.get("secret").is_none());
        assert!(value.get("hints").is_none());
        assert_eq!(value["current_guess"], json!([null, null]));
        assert_eq!(value["history"], json!([null, null, null]));
    }

    #[test]
    fn record_lists_history_and_secret_when_finished() {
        let mut state = game();
        state.set_slot(0, Color::new("blue").unwrap()).unwrap();
        state.set_slot(1, Color::new("red").unwrap()).unwrap();
        state.submit_guess().unwrap();
        state.give_up().unwrap();

        let record = GameRecord::from(&state);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["palette"], json!(["red", "blue"]));
        assert_eq!(value["slots"], 2);
        assert_eq!(value["max_rows"], 3);
        assert_eq!(value["current_turn"], 1);
        assert_eq!(value["outcome"], "given_up");
        assert_eq!(value["finished"], true);
        assert_eq!(value["secret"], json!(["red", "blue"]));
        assert_eq!(
            value["history"][0],
            json!({"guess": ["blue", "red"], "score": {"exact": 0, "partial": 2}})
        );
    }
}
