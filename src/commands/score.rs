//! Code scoring command
//!
//! Scores a guess against a given secret without starting a game.

use crate::core::{Code, Palette, Score};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub score: Score,
}

/// Score `guess` against `secret`, both given as palette names or numbers
///
/// # Errors
///
/// Returns an error if:
/// - Either code contains something that is not a palette color
/// - Either code is empty
/// - The two codes differ in length
pub fn score_codes(secret: &str, guess: &str, palette: &Palette) -> Result<ScoreResult, String> {
    let secret = Code::parse(secret, palette).ok_or("Secret contains an unknown color")?;
    let guess = Code::parse(guess, palette).ok_or("Guess contains an unknown color")?;

    if secret.is_empty() {
        return Err("Secret must have at least one color".to_string());
    }

    if secret.len() != guess.len() {
        return Err(format!(
            "Guess has {} colors but the secret has {}",
            guess.len(),
            secret.len()
        ));
    }

    let score = Score::calculate(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        score,
    })
}
