//! Palette file loading utilities
//!
//! A palette file lists one color per line as `name #RRGGBB`. Blank lines and
//! lines starting with `#` are skipped, as is any line that does not parse.

use super::{Swatch, Swatches};
use crate::core::Color;
use crate::error::ConfigError;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Error loading a palette file
#[derive(Debug, Error)]
pub enum PaletteFileError {
    #[error("failed to read palette file: {0}")]
    Io(#[from] io::Error),
    #[error("palette file is not usable: {0}")]
    Config(#[from] ConfigError),
}

/// Load swatches from a file
///
/// The result is checked to form a valid palette.
///
/// # Errors
///
/// Returns `PaletteFileError::Io` if the file cannot be read and
/// `PaletteFileError::Config` if the parsed colors do not form a palette.
///
/// # Examples
/// ```no_run
/// use mastermind::palettes::loader::load_from_file;
///
/// let swatches = load_from_file("palettes/pastel.txt").unwrap();
/// println!("Loaded {} colors", swatches.as_slice().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Swatches, PaletteFileError> {
    let content = fs::read_to_string(path)?;
    let swatches = swatches_from_str(&content);
    swatches.palette()?;
    Ok(swatches)
}

/// Parse swatches from palette file contents
///
/// # Examples
/// ```
/// use mastermind::palettes::loader::swatches_from_str;
///
/// let swatches = swatches_from_str("# warm\nred #ff0000\norange #FF8800\n");
/// assert_eq!(swatches.as_slice().len(), 2);
/// assert_eq!(swatches.as_slice()[1].rgb, (0xff, 0x88, 0x00));
/// ```
#[must_use]
pub fn swatches_from_str(content: &str) -> Swatches {
    Swatches::new(
        content
            .lines()
            .enumerate()
            .filter_map(|(number, line)| {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    return None;
                }

                let swatch = parse_line(trimmed);
                if swatch.is_none() {
                    warn!(line = number + 1, "skipping malformed palette line");
                }
                swatch
            })
            .collect(),
    )
}

/// Parse a single `name #RRGGBB` line
fn parse_line(line: &str) -> Option<Swatch> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?;
    let hex = parts.next()?.strip_prefix('#')?;

    if parts.next().is_some() || hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let value = u32::from_str_radix(hex, 16).ok()?;
    let color = Color::new(name).ok()?;

    Some(Swatch::new(color, Swatch::unpack(value)))
}
