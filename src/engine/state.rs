//! Game state record and its deterministic transitions
//!
//! `GameState` is plain data. Presentation code reads it through accessors and
//! changes it only through the methods below; operations that need randomness
//! (new games, hints) go through [`super::Engine`].

use super::GameConfig;
use crate::core::{Code, Color, Guess, Palette, Score};
use crate::error::{ConfigError, GameError};
use serde::Serialize;
use tracing::{debug, info};

/// Game outcome
///
/// `InProgress` is the only non-terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
    GivenUp,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess and its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub guess: Code,
    pub score: Score,
}

/// A single disclosed secret slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub slot: usize,
    pub color: Color,
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    secret: Code,
    current_turn: usize,
    current_guess: Guess,
    history: Vec<Option<HistoryEntry>>,
    outcome: Outcome,
}

impl GameState {
    /// Start a game with a known secret
    ///
    /// Normal play draws the secret through [`super::Engine::new_game`]; this
    /// constructor serves scripted games and tests.
    ///
    /// # Errors
    /// Returns `ConfigError::SecretLength` or `ConfigError::SecretColor` if the
    /// secret does not fit the configuration.
    pub fn with_secret(config: GameConfig, secret: Code) -> Result<Self, ConfigError> {
        if secret.len() != config.slots() {
            return Err(ConfigError::SecretLength {
                expected: config.slots(),
                actual: secret.len(),
            });
        }

        if let Some(color) = secret
            .colors()
            .iter()
            .find(|c| !config.palette().contains(c))
        {
            return Err(ConfigError::SecretColor(color.name().to_string()));
        }

        Ok(Self::fresh(config, secret))
    }

    /// Build the initial record; `secret` must already fit `config`
    pub(super) fn fresh(config: GameConfig, secret: Code) -> Self {
        debug!(
            slots = config.slots(),
            rows = config.max_rows(),
            colors = config.palette().len(),
            "new game"
        );

        Self {
            current_guess: Guess::empty(config.slots()),
            history: vec![None; config.max_rows()],
            current_turn: 0,
            outcome: Outcome::InProgress,
            secret,
            config,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        self.config.palette()
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.config.slots()
    }

    #[inline]
    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.config.max_rows()
    }

    /// Zero-based index of the active row
    ///
    /// Frozen at the resolving row once the game is won or abandoned, and at
    /// `max_rows` once every row has been used.
    #[inline]
    #[must_use]
    pub const fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// Scratch buffer of the active row
    #[inline]
    #[must_use]
    pub const fn current_guess(&self) -> &Guess {
        &self.current_guess
    }

    /// One entry per row; `Some` once that row has been submitted
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Option<HistoryEntry>] {
        &self.history
    }

    /// Submitted rows in order
    pub fn submitted(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().flatten()
    }

    /// Number of guesses submitted so far
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.submitted().count()
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// The secret, available only once the game is over
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&Code> {
        if self.is_finished() {
            Some(&self.secret)
        } else {
            None
        }
    }

    pub(super) const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Place a color in a slot of the active row
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game has ended
    /// - `GameError::InvalidSlot` if `slot` is outside `0..slots`
    /// - `GameError::InvalidColor` if `color` is not in the palette
    pub fn set_slot(&mut self, slot: usize, color: Color) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.ensure_slot(slot)?;

        if !self.palette().contains(&color) {
            return Err(GameError::InvalidColor(color.name().to_string()));
        }

        self.current_guess.set(slot, color);
        Ok(())
    }

    /// Empty a slot of the active row
    ///
    /// # Errors
    /// `GameError::GameOver` once the game has ended, `GameError::InvalidSlot`
    /// for an out-of-range slot.
    pub fn clear_slot(&mut self, slot: usize) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.ensure_slot(slot)?;

        self.current_guess.clear(slot);
        Ok(())
    }

    /// Score the active row and advance the game
    ///
    /// On success the row is recorded in the history. A perfect score wins;
    /// otherwise the last row loses, moving the turn past the board, and any
    /// earlier row moves to the next turn with an empty buffer.
    ///
    /// # Errors
    /// `GameError::GameOver` once the game has ended, `GameError::IncompleteGuess`
    /// if any slot is empty (state is left untouched).
    pub fn submit_guess(&mut self) -> Result<Score, GameError> {
        self.ensure_in_progress()?;

        let guess = self
            .current_guess
            .to_code()
            .ok_or(GameError::IncompleteGuess)?;
        let score = Score::calculate(&self.secret, &guess);
        let turn = self.current_turn;

        debug!(turn, exact = score.exact, partial = score.partial, "guess scored");
        self.history[turn] = Some(HistoryEntry { guess, score });

        if score.is_perfect(self.slots()) {
            self.outcome = Outcome::Won;
            info!(attempts = turn + 1, "code broken");
        } else if turn + 1 == self.max_rows() {
            self.outcome = Outcome::Lost;
            self.current_turn = self.max_rows();
            info!(attempts = turn + 1, "out of attempts");
        } else {
            self.current_turn += 1;
            self.current_guess.clear_all();
        }

        Ok(score)
    }

    /// Abandon the game and reveal the secret
    ///
    /// # Errors
    /// `GameError::GameOver` if the game has already ended, including a
    /// previous give-up.
    pub fn give_up(&mut self) -> Result<&Code, GameError> {
        self.ensure_in_progress()?;

        self.outcome = Outcome::GivenUp;
        info!(attempts = self.attempts_used(), "game abandoned");
        Ok(&self.secret)
    }

    pub(super) fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    fn ensure_slot(&self, slot: usize) -> Result<(), GameError> {
        if slot < self.slots() {
            Ok(())
        } else {
            Err(GameError::InvalidSlot {
                index: slot,
                slots: self.slots(),
            })
        }
    }
}
