//! Palette of colors available for a game

use super::Color;
use crate::error::ConfigError;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Ordered set of distinct colors, fixed for a game's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Minimum number of colors in a playable palette
    pub const MIN_COLORS: usize = 2;

    /// Create a palette from an ordered list of colors
    ///
    /// # Errors
    /// Returns `ConfigError::PaletteTooSmall` for fewer than two colors and
    /// `ConfigError::DuplicateColor` if a color appears twice.
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        if colors.len() < Self::MIN_COLORS {
            return Err(ConfigError::PaletteTooSmall(colors.len()));
        }

        let mut seen = FxHashSet::default();
        for color in &colors {
            if !seen.insert(color) {
                return Err(ConfigError::DuplicateColor(color.name().to_string()));
            }
        }

        Ok(Self { colors })
    }

    /// All colors in palette order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette; provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Check whether a color belongs to this palette
    #[must_use]
    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Zero-based position of a color
    #[must_use]
    pub fn position(&self, color: &Color) -> Option<usize> {
        self.colors.iter().position(|c| c == color)
    }

    /// Color at a zero-based index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Resolve user input to a palette color
    ///
    /// Accepts either a color name or a 1-based palette number (the digit
    /// shortcuts shown next to each swatch).
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, Palette};
    ///
    /// let palette = Palette::new(vec![
    ///     Color::new("red").unwrap(),
    ///     Color::new("green").unwrap(),
    /// ]).unwrap();
    ///
    /// assert_eq!(palette.resolve("2").unwrap().name(), "green");
    /// assert_eq!(palette.resolve("RED").unwrap().name(), "red");
    /// assert!(palette.resolve("3").is_none());
    /// ```
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<&Color> {
        let input = input.trim();

        if let Ok(number) = input.parse::<usize>() {
            return number.checked_sub(1).and_then(|i| self.colors.get(i));
        }

        let color = Color::new(input).ok()?;
        self.colors.iter().find(|c| **c == color)
    }
}
