//! Filter command
//!
//! Lists the dictionary words consistent with a set of annotated guesses.

use crate::core::{Guess, GuessHistory, Word};
use crate::filter::filter;

/// Result of filtering a dictionary
pub struct FilterResult {
    pub history: GuessHistory,
    pub total: usize,
    pub remaining: Vec<Word>,
}

/// Parse `word:pattern` arguments into a history
///
/// # Errors
///
/// Returns an error naming the first argument that does not parse.
pub fn parse_history<S: AsRef<str>>(pairs: &[S]) -> Result<GuessHistory, String> {
    pairs
        .iter()
        .map(|pair| Guess::parse(pair.as_ref()))
        .collect::<Result<Vec<_>, _>>()
        .map(GuessHistory::from)
}

/// Filter `dictionary` by the guesses given as `word:pattern` pairs
///
/// # Errors
///
/// Returns an error if a pair does not parse or its length does not match
/// the dictionary.
pub fn run_filter<S: AsRef<str>>(dictionary: &[Word], pairs: &[S]) -> Result<FilterResult, String> {
    let history = parse_history(pairs)?;
    let remaining = filter(dictionary, &history).map_err(|e| e.to_string())?;

    Ok(FilterResult {
        history,
        total: dictionary.len(),
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn filters_by_pairs() {
        let dictionary = words_from_slice(&["sweet", "sheep", "steel", "speed", "creek"]);
        let result = run_filter(&dictionary, &["SLEEK:G-GG-"]).unwrap();

        assert_eq!(result.total, 5);
        assert_eq!(result.history.len(), 1);
        let texts: Vec<&str> = result.remaining.iter().map(Word::text).collect();
        assert_eq!(texts, ["sweet", "sheep", "speed"]);
    }

    #[test]
    fn no_pairs_keeps_everything() {
        let dictionary = words_from_slice(&["sweet", "sheep"]);
        let result = run_filter::<&str>(&dictionary, &[]).unwrap();
        assert_eq!(result.remaining, dictionary);
    }

    #[test]
    fn bad_pair_is_error() {
        let dictionary = words_from_slice(&["sweet"]);
        assert!(run_filter(&dictionary, &["sleek"]).is_err());
        assert!(run_filter(&dictionary, &["sleeks:G-GG--"]).is_err());
    }
}
