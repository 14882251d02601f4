//! Hint command
//!
//! Ranks the next guesses for a game in progress.

use super::filter::parse_history;
use crate::core::Word;
use crate::hint::Hinter;

/// One suggested guess
pub struct HintLine {
    pub word: String,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub is_candidate: bool,
}

/// Result of a hint request
pub struct HintResult {
    pub remaining: usize,
    pub hints: Vec<HintLine>,
}

/// Suggest up to `count` guesses from `guess_pool` given `word:pattern` pairs
///
/// # Errors
///
/// Returns an error if a pair does not parse or lengths disagree.
pub fn suggest<S: AsRef<str>>(
    guess_pool: &[Word],
    dictionary: &[Word],
    pairs: &[S],
    count: usize,
) -> Result<HintResult, String> {
    let history = parse_history(pairs)?;
    let hinter = Hinter::new(guess_pool, dictionary);

    let remaining = hinter.candidates(&history).map_err(|e| e.to_string())?.len();
    let ranked = if remaining == 1 {
        hinter
            .next_hint(&history)
            .map_err(|e| e.to_string())?
            .into_iter()
            .collect()
    } else {
        hinter
            .top_hints(&history, count)
            .map_err(|e| e.to_string())?
    };

    let hints = ranked
        .into_iter()
        .map(|r| HintLine {
            word: r.word.text().to_string(),
            entropy: r.metrics.entropy,
            expected_remaining: r.metrics.expected_remaining,
            max_partition: r.metrics.max_partition,
            is_candidate: r.is_candidate,
        })
        .collect();

    Ok(HintResult { remaining, hints })
}
