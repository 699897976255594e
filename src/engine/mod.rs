//! Mastermind rules engine
//!
//! Owns the secret, the guess history, the turn pointer and the outcome.
//! No I/O, no rendering: presentation layers read [`GameState`] and drive it
//! through the operations here.

mod config;
mod driver;
mod state;

pub use config::GameConfig;
pub use driver::Engine;
pub use state::{GameState, HistoryEntry, Hint, Outcome};
