//! Player-facing wording for engine errors
//!
//! The engine reports error kinds; `Display` on those kinds is diagnostic text
//! for logs and the scripted harness. Front ends phrase them for the player here.

use crate::error::{ConfigError, GameError};

/// Describe a rejected game action for the player
#[must_use]
pub fn describe_error(err: &GameError) -> String {
    match err {
        GameError::Config(config) => describe_config_error(config),
        GameError::IncompleteGuess => "Fill every slot before submitting.".to_string(),
        GameError::GameOver => "The game is over - start a new one.".to_string(),
        GameError::InvalidSlot { index, slots } => {
            format!("There is no slot {}; pick one from 1 to {slots}.", index + 1)
        }
        GameError::InvalidColor(name) => format!("{name} is not one of this game's colors."),
    }
}

/// Describe a rejected game setup for the player
#[must_use]
pub fn describe_config_error(err: &ConfigError) -> String {
    match err {
        ConfigError::PaletteTooSmall(count) => {
            format!("A game needs at least 2 colors, but only {count} are available.")
        }
        ConfigError::DuplicateColor(name) => format!("The palette lists {name} twice."),
        ConfigError::NoSlots => "The code needs at least one slot.".to_string(),
        ConfigError::NoRows => "The board needs at least one row.".to_string(),
        ConfigError::SecretLength { expected, actual } => {
            format!("The secret must have {expected} colors, not {actual}.")
        }
        ConfigError::SecretColor(name) => format!("{name} is not one of this game's colors."),
    }
}
