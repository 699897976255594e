//! Color symbols
//!
//! A color is an opaque, identity-comparable name. Rendering details (RGB values)
//! live in [`crate::palettes`], not here.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single peg color, identified by its normalized name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Create a color from a name
    ///
    /// Names are trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `ColorError` if the name is empty or contains anything other than
    /// ASCII letters, digits or `-`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// let red = Color::new(" Red ").unwrap();
    /// assert_eq!(red.name(), "red");
    ///
    /// assert!(Color::new("").is_err());
    /// assert!(Color::new("sky blue").is_err());
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self, ColorError> {
        let name = name.as_ref().trim().to_ascii_lowercase();

        if name.is_empty() {
            return Err(ColorError::Empty);
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ColorError::InvalidCharacters);
        }

        Ok(Self(name))
    }

    /// Get the color name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
