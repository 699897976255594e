//! Error kinds reported by the rules engine
//!
//! Every error here is local and non-fatal: the engine reports a kind and the
//! presentation layer decides how to phrase it for the player.

use thiserror::Error;

/// Error for invalid color names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Color name must not be empty")]
    Empty,
    #[error("Color name may only contain ASCII letters, digits and '-'")]
    InvalidCharacters,
}

/// Error for bad game construction parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Palette needs at least 2 colors, got {0}")]
    PaletteTooSmall(usize),
    #[error("Palette lists color '{0}' more than once")]
    DuplicateColor(String),
    #[error("A code needs at least 1 slot")]
    NoSlots,
    #[error("A game needs at least 1 row")]
    NoRows,
    #[error("Secret has {actual} slots, expected {expected}")]
    SecretLength { expected: usize, actual: usize },
    #[error("Secret uses color '{0}' which is not in the palette")]
    SecretColor(String),
}

/// Error returned by game operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Every slot must be filled before submitting")]
    IncompleteGuess,
    #[error("The game is already over")]
    GameOver,
    #[error("Slot {index} is out of range (0..{slots})")]
    InvalidSlot { index: usize, slots: usize },
    #[error("Color '{0}' is not in the palette")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_into_game_error() {
        let err: GameError = ConfigError::NoSlots.into();
        assert_eq!(err, GameError::Config(ConfigError::NoSlots));
        assert_eq!(err.to_string(), "A code needs at least 1 slot");
    }

    #[test]
    fn invalid_slot_reports_range() {
        let err = GameError::InvalidSlot { index: 7, slots: 4 };
        assert_eq!(err.to_string(), "Slot 7 is out of range (0..4)");
    }
}
