//! Game construction parameters

use crate::core::Palette;
use crate::error::ConfigError;
use crate::palettes::default_palette;
use serde::Serialize;

/// Validated game dimensions and palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    palette: Palette,
    slots: usize,
    max_rows: usize,
}

impl GameConfig {
    /// Slots per code in the classic game
    pub const DEFAULT_SLOTS: usize = 4;

    /// Attempts allowed in the classic game
    pub const DEFAULT_ROWS: usize = 10;

    /// Create a configuration
    ///
    /// # Errors
    /// Returns `ConfigError::NoSlots` or `ConfigError::NoRows` for zero dimensions.
    /// Palette size is already enforced by [`Palette::new`].
    pub fn new(palette: Palette, slots: usize, max_rows: usize) -> Result<Self, ConfigError> {
        if slots == 0 {
            return Err(ConfigError::NoSlots);
        }
        if max_rows == 0 {
            return Err(ConfigError::NoRows);
        }

        Ok(Self {
            palette,
            slots,
            max_rows,
        })
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.slots
    }

    #[inline]
    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }
}

impl Default for GameConfig {
    /// Six colors, four slots, ten rows
    fn default() -> Self {
        Self {
            palette: default_palette(),
            slots: Self::DEFAULT_SLOTS,
            max_rows: Self::DEFAULT_ROWS,
        }
    }
}
