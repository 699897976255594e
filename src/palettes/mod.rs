//! Color palettes for display
//!
//! The engine only knows color names. A [`Swatch`] pairs a name with the RGB
//! value front ends paint it with.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_COUNT, DEFAULT_SWATCHES};

use crate::core::{Color, Palette};
use crate::error::ConfigError;

/// A palette color with its display value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub color: Color,
    pub rgb: (u8, u8, u8),
}

impl Swatch {
    #[must_use]
    pub const fn new(color: Color, rgb: (u8, u8, u8)) -> Self {
        Self { color, rgb }
    }

    /// Split a packed `0xRRGGBB` value
    #[must_use]
    pub const fn unpack(hex: u32) -> (u8, u8, u8) {
        ((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// Ordered swatches backing a game palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatches(Vec<Swatch>);

impl Swatches {
    #[must_use]
    pub const fn new(swatches: Vec<Swatch>) -> Self {
        Self(swatches)
    }

    /// The embedded six-color set
    #[must_use]
    pub fn embedded() -> Self {
        Self(
            DEFAULT_SWATCHES
                .iter()
                .filter_map(|&(name, hex)| {
                    Color::new(name).ok().map(|c| Swatch::new(c, Swatch::unpack(hex)))
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Swatch] {
        &self.0
    }

    /// Keep only the first `count` swatches
    #[must_use]
    pub fn truncated(mut self, count: usize) -> Self {
        self.0.truncate(count);
        self
    }

    /// Display value for a color, if it has one
    #[must_use]
    pub fn rgb_for(&self, color: &Color) -> Option<(u8, u8, u8)> {
        self.0.iter().find(|s| &s.color == color).map(|s| s.rgb)
    }

    /// Build the game palette from these swatches
    ///
    /// # Errors
    /// Returns `ConfigError` if fewer than two swatches remain or a name repeats.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Palette::new(self.0.iter().map(|s| s.color.clone()).collect())
    }
}

/// The embedded six-color palette
///
/// # Panics
/// Will not panic - the embedded table is covered by tests.
#[must_use]
pub fn default_palette() -> Palette {
    let colors = DEFAULT_SWATCHES
        .iter()
        .filter_map(|&(name, _)| Color::new(name).ok())
        .collect();

    Palette::new(colors).expect("embedded table holds six distinct valid names")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_SWATCHES.len(), DEFAULT_COUNT);
        assert_eq!(Swatches::embedded().as_slice().len(), DEFAULT_COUNT);
        assert_eq!(default_palette().len(), DEFAULT_COUNT);
    }

    #[test]
    fn default_names_are_valid_colors() {
        for &(name, _) in DEFAULT_SWATCHES {
            assert!(Color::new(name).is_ok(), "'{name}' is not a valid color");
        }
    }

    #[test]
    fn embedded_palette_matches_default() {
        assert_eq!(Swatches::embedded().palette().unwrap(), default_palette());
    }

    #[test]
    fn unpack_hex() {
        assert_eq!(Swatch::unpack(0xEF_47_6F), (0xEF, 0x47, 0x6F));
        assert_eq!(Swatch::unpack(0x00_00_FF), (0, 0, 255));
    }

    #[test]
    fn rgb_lookup() {
        let swatches = Swatches::embedded();
        let rose = Color::new("rose").unwrap();
        let pink = Color::new("pink").unwrap();

        assert_eq!(swatches.rgb_for(&rose), Some((0xEF, 0x47, 0x6F)));
        assert_eq!(swatches.rgb_for(&pink), None);
    }

    #[test]
    fn truncated_palette() {
        let swatches = Swatches::embedded().truncated(3);
        let palette = swatches.palette().unwrap();

        assert_eq!(palette.len(), 3);
        assert_eq!(palette.get(2).unwrap().name(), "green");
        assert_eq!(
            Swatches::embedded().truncated(1).palette(),
            Err(ConfigError::PaletteTooSmall(1))
        );
    }
}
