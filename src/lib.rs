//! Mastermind
//!
//! A code-breaking game: guess a hidden sequence of colors within a bounded
//! number of attempts, scored after each guess by exact and partial matches.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::Color;
//! use mastermind::engine::{Engine, GameConfig, Outcome};
//!
//! let mut engine = Engine::seeded(42);
//! let mut game = engine.new_game(GameConfig::default());
//!
//! for slot in 0..game.slots() {
//!     game.set_slot(slot, Color::new("rose").unwrap()).unwrap();
//! }
//! let score = game.submit_guess().unwrap();
//! println!("{} exact, {} partial", score.exact, score.partial);
//!
//! game.give_up().unwrap();
//! assert_eq!(game.outcome(), Outcome::GivenUp);
//! ```

// Core domain types
pub mod core;

// Error kinds
pub mod error;

// Rules engine
pub mod engine;

// Display palettes
pub mod palettes;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
