//! Color sequences: complete codes and the in-progress guess buffer

use super::{Color, Palette};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete sequence of colors
///
/// Used for the secret and for every submitted guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(Vec<Color>);

impl Code {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Parse a code from palette names or 1-based numbers
    ///
    /// Elements may be separated by whitespace or commas.
    /// Returns `None` if any element does not resolve to a palette color.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color, Palette};
    ///
    /// let palette = Palette::new(vec![
    ///     Color::new("red").unwrap(),
    ///     Color::new("green").unwrap(),
    /// ]).unwrap();
    ///
    /// let code = Code::parse("red, 2 2", &palette).unwrap();
    /// assert_eq!(code.to_string(), "red green green");
    /// ```
    #[must_use]
    pub fn parse(input: &str, palette: &Palette) -> Option<Self> {
        input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| palette.resolve(part).cloned())
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

/// Scratch buffer for the active row
///
/// Each slot is either a color or empty. Bounds and palette membership are
/// checked by the engine before it writes here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Guess(Vec<Option<Color>>);

impl Guess {
    /// Create an all-empty guess with `slots` positions
    #[must_use]
    pub fn empty(slots: usize) -> Self {
        Self(vec![None; slots])
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<Color>] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color at a slot, if filled
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Color> {
        self.0.get(slot).and_then(Option::as_ref)
    }

    /// Number of filled slots
    #[must_use]
    pub fn filled(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no slot is empty
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Convert to a complete code, or `None` while any slot is empty
    #[must_use]
    pub fn to_code(&self) -> Option<Code> {
        self.0.iter().cloned().collect::<Option<Vec<_>>>().map(Code)
    }

    pub(crate) fn set(&mut self, slot: usize, color: Color) {
        self.0[slot] = Some(color);
    }

    pub(crate) fn clear(&mut self, slot: usize) {
        self.0[slot] = None;
    }

    pub(crate) fn clear_all(&mut self) {
        self.0.iter_mut().for_each(|slot| *slot = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::new(
            ["red", "green", "blue"]
                .iter()
                .map(|n| Color::new(n).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn code_parse_mixed_input() {
        let palette = palette();
        let code = Code::parse("1 green,BLUE  3", &palette).unwrap();

        let names: Vec<&str> = code.colors().iter().map(Color::name).collect();
        assert_eq!(names, ["red", "green", "blue", "blue"]);
    }

    #[test]
    fn code_parse_rejects_unknown() {
        let palette = palette();
        assert!(Code::parse("red pink", &palette).is_none());
        assert!(Code::parse("red 9", &palette).is_none());
    }

    #[test]
    fn code_parse_empty_input() {
        let code = Code::parse("  ", &palette()).unwrap();
        assert!(code.is_empty());
    }

    #[test]
    fn code_display() {
        let code = Code::parse("3 1", &palette()).unwrap();
        assert_eq!(code.to_string(), "blue red");
    }

    #[test]
    fn guess_starts_empty() {
        let guess = Guess::empty(4);
        assert_eq!(guess.len(), 4);
        assert_eq!(guess.filled(), 0);
        assert!(!guess.is_complete());
        assert!(guess.to_code().is_none());
    }

    #[test]
    fn guess_fill_and_clear() {
        let red = Color::new("red").unwrap();
        let mut guess = Guess::empty(2);

        guess.set(0, red.clone());
        assert_eq!(guess.get(0), Some(&red));
        assert_eq!(guess.get(1), None);
        assert_eq!(guess.filled(), 1);

        guess.set(1, red.clone());
        assert!(guess.is_complete());
        assert_eq!(guess.to_code().unwrap().colors(), &[red.clone(), red.clone()]);

        guess.clear(0);
        assert!(!guess.is_complete());

        guess.clear_all();
        assert_eq!(guess, Guess::empty(2));
    }
}
