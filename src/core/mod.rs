//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain values with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod color;
mod palette;
mod score;

pub use code::{Code, Guess};
pub use color::Color;
pub use palette::Palette;
pub use score::Score;
