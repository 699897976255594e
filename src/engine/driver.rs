//! Randomized game operations

use super::{GameConfig, GameState, Hint};
use crate::core::{Code, Palette};
use crate::error::GameError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Rules engine
///
/// Owns the random source used to draw secrets and pick hint slots. Everything
/// else about a game lives in the [`GameState`] record it hands out.
#[derive(Debug, Clone)]
pub struct Engine<R: Rng> {
    rng: R,
}

impl Engine<StdRng> {
    /// Engine with a deterministic random source
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Engine seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine around any random source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Start a game with a freshly drawn secret
    pub fn new_game(&mut self, config: GameConfig) -> GameState {
        let secret = self.random_code(config.palette(), config.slots());
        GameState::fresh(config, secret)
    }

    /// Validate parameters and start a game
    ///
    /// # Errors
    /// Returns `GameError::Config` for zero slots or rows. Palette size is
    /// enforced when the palette is built.
    pub fn start(
        &mut self,
        palette: Palette,
        slots: usize,
        max_rows: usize,
    ) -> Result<GameState, GameError> {
        let config = GameConfig::new(palette, slots, max_rows)?;
        Ok(self.new_game(config))
    }

    /// Discard `state` and replace it with a new game
    pub fn reset(&mut self, state: &mut GameState, config: GameConfig) {
        *state = self.new_game(config);
    }

    /// Start over with the same configuration
    pub fn restart(&mut self, state: &mut GameState) {
        let config = state.config().clone();
        self.reset(state, config);
    }

    /// Disclose the secret color of one uniformly chosen slot
    ///
    /// Hints do not change the game and keep no memory; repeated calls may
    /// reveal the same slot again.
    ///
    /// # Errors
    /// `GameError::GameOver` once the game has ended.
    pub fn request_hint(&mut self, state: &GameState) -> Result<Hint, GameError> {
        state.ensure_in_progress()?;

        let slot = self.rng.random_range(0..state.slots());
        let color = state.secret().colors()[slot].clone();
        debug!(slot, "hint disclosed");

        Ok(Hint { slot, color })
    }

    /// Draw a code by independent uniform sampling with replacement
    fn random_code(&mut self, palette: &Palette, slots: usize) -> Code {
        let colors = palette.colors();
        Code::new(
            (0..slots)
                .map(|_| colors[self.rng.random_range(0..colors.len())].clone())
                .collect(),
        )
    }
}
