//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod messages;
pub mod record;

pub use display::{print_board, print_hint, print_outcome, print_palette, print_score_result};
pub use messages::describe_error;
pub use record::GameRecord;
