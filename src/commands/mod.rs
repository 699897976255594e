//! Command implementations

pub mod replay;
pub mod score;
pub mod simple;

pub use replay::{ReplayConfig, replay};
pub use score::{ScoreResult, score_codes};
pub use simple::run_simple;
