//! Evaluate command
//!
//! Marks a guess against a secret.

use crate::core::{Pattern, Word, evaluate};

/// Result of evaluating one guess
pub struct EvaluationResult {
    pub secret: String,
    pub guess: String,
    pub pattern: Pattern,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn evaluate_words(secret: &str, guess: &str) -> Result<EvaluationResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let pattern = evaluate(&secret, &guess).map_err(|e| e.to_string())?;

    Ok(EvaluationResult {
        secret: secret.text().to_string(),
        guess: guess.text().to_string(),
        pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_and_normalises() {
        let result = evaluate_words("TEENS", "Teeth").unwrap();
        assert_eq!(result.secret, "teens");
        assert_eq!(result.guess, "teeth");
        assert_eq!(result.pattern.to_emoji(), "🟩🟩🟩⬜⬜");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(evaluate_words("te3ns", "teeth").is_err());
        assert!(evaluate_words("teens", "teethe").is_err());
    }
}
