//! Guess evaluation against a secret

use super::{InvalidGuess, LetterMark, Pattern, Word};

/// Calculate the marks produced when `guess` is played against `secret`
///
/// Duplicate letters are count-limited: a letter guessed twice but present once
/// in the secret earns exactly one positive mark.
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct`; every non-matching secret letter
///    goes into the available pool
/// 2. Second pass: mark remaining positions `Present` while the pool still has
///    that letter, otherwise `Absent`
///
/// # Errors
/// Returns `InvalidGuess::WordLength` if the two words differ in length.
///
/// # Examples
/// ```
/// use wordle_filter::core::{Word, evaluate};
///
/// let secret = Word::new("floor").unwrap();
/// let guess = Word::new("robot").unwrap();
///
/// // R(yellow) O(yellow) B(gray) O(green) T(gray)
/// let pattern = evaluate(&secret, &guess).unwrap();
/// assert_eq!(pattern.to_emoji(), "🟨🟨⬜🟩⬜");
/// ```
pub fn evaluate(secret: &Word, guess: &Word) -> Result<Pattern, InvalidGuess> {
    if secret.len() != guess.len() {
        return Err(InvalidGuess::WordLength {
            word: guess.text().to_string(),
            expected: secret.len(),
            found: guess.len(),
        });
    }

    let secret_letters = secret.letters();
    let guess_letters = guess.letters();

    let mut marks = vec![LetterMark::Absent; guess.len()];
    let mut available = [0u8; 26];

    // First pass: greens
    for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
        if g == s {
            marks[i] = LetterMark::Correct;
        } else {
            available[usize::from(s - b'a')] += 1;
        }
    }

    // Second pass: yellows from what is left in the pool
    for (mark, &g) in marks.iter_mut().zip(guess_letters) {
        if *mark == LetterMark::Correct {
            continue;
        }
        let slot = &mut available[usize::from(g - b'a')];
        if *slot > 0 {
            *mark = LetterMark::Present;
            *slot -= 1;
        }
    }

    Ok(Pattern::new(marks))
}
