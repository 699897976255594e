//! Interactive TUI mode
//!
//! Full-screen board driven by the keyboard.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use rendering::ui;
