//! Guess scoring
//!
//! A score counts exact matches (right color, right slot; historically black
//! pegs) and partial matches (right color, wrong slot; historically white pegs).
//! A secret color is consumed by at most one match, so `exact + partial` never
//! exceeds the code length.

use super::{Code, Color};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for one submitted guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub exact: usize,
    pub partial: usize,
}

impl Score {
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Score `guess` against `secret`
    ///
    /// Both codes must have the same length; extra elements of the longer one
    /// are ignored.
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches; every unmatched secret color goes into
    ///    a pool of available colors
    /// 2. Second pass: each unmatched guess color takes one occurrence from the
    ///    pool, if any is left, and counts as a partial match
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color, Score};
    ///
    /// let code = |names: &[&str]| {
    ///     Code::new(names.iter().map(|n| Color::new(n).unwrap()).collect())
    /// };
    ///
    /// let secret = code(&["red", "red", "blue", "blue"]);
    /// let guess = code(&["red", "blue", "blue", "blue"]);
    ///
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(3, 0));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        let pairs = || secret.colors().iter().zip(guess.colors());

        // First pass: exact matches, pool the rest of the secret
        let mut exact = 0;
        let mut available: FxHashMap<&Color, usize> = FxHashMap::default();
        for (s, g) in pairs() {
            if s == g {
                exact += 1;
            } else {
                *available.entry(s).or_insert(0) += 1;
            }
        }

        // Second pass: partial matches drawn from the pool
        let mut partial = 0;
        for (s, g) in pairs() {
            if s != g
                && let Some(count) = available.get_mut(g)
                && *count > 0
            {
                *count -= 1;
                partial += 1;
            }
        }

        Self { exact, partial }
    }

    /// True when every one of `slots` positions matched exactly
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, slots: usize) -> bool {
        self.exact == slots
    }

    /// Slots that matched neither exactly nor partially
    #[inline]
    #[must_use]
    pub const fn misses(self, slots: usize) -> usize {
        slots.saturating_sub(self.exact + self.partial)
    }

    /// Render as pegs: ● per exact match followed by ○ per partial match
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Score;
    ///
    /// assert_eq!(Score::new(2, 1).to_pegs(), "●●○");
    /// assert_eq!(Score::new(0, 0).to_pegs(), "");
    /// ```
    #[must_use]
    pub fn to_pegs(self) -> String {
        let mut pegs = String::with_capacity((self.exact + self.partial) * 3);
        pegs.extend(std::iter::repeat_n('●', self.exact));
        pegs.extend(std::iter::repeat_n('○', self.partial));
        pegs
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}
