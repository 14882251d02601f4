//! Dictionary filtering against a guess history

use super::GuessConstraint;
use crate::core::{Guess, GuessHistory, InvalidGuess, Word};
use log::debug;

/// Check whether `candidate` is consistent with one guess
///
/// # Errors
/// Returns `InvalidGuess::WordLength` if the candidate and guess differ in length.
///
/// # Examples
/// ```
/// use wordle_filter::core::{Guess, Word};
/// use wordle_filter::filter::is_consistent;
///
/// let guess = Guess::parse("teeth:GGG--").unwrap();
/// assert!(is_consistent(&Word::new("teens").unwrap(), &guess).unwrap());
/// assert!(!is_consistent(&Word::new("tease").unwrap(), &guess).unwrap());
/// ```
pub fn is_consistent(candidate: &Word, guess: &Guess) -> Result<bool, InvalidGuess> {
    GuessConstraint::from_guess(guess).matches(candidate)
}

/// Filter `dictionary` to the words consistent with every guess in `history`
///
/// The result keeps dictionary order and borrows from it. An empty history
/// keeps every word. Each guess is an independent constraint, so the order of
/// the history does not matter.
///
/// # Errors
/// Returns `InvalidGuess::WordLength` for the first dictionary word whose
/// length differs from a guess.
pub fn filter_candidates<'a>(
    dictionary: &'a [Word],
    history: &GuessHistory,
) -> Result<Vec<&'a Word>, InvalidGuess> {
    if history.is_empty() {
        return Ok(dictionary.iter().collect());
    }

    let constraints: Vec<GuessConstraint> =
        history.iter().map(GuessConstraint::from_guess).collect();

    let mut kept = Vec::new();
    for candidate in dictionary {
        let mut consistent = true;
        for constraint in &constraints {
            // Length is checked even after a rejection so bad input never hides
            if !constraint.matches(candidate)? {
                consistent = false;
            }
        }
        if consistent {
            kept.push(candidate);
        }
    }

    debug!(
        "filtered {} words to {} over {} guesses",
        dictionary.len(),
        kept.len(),
        history.len()
    );

    Ok(kept)
}

/// Owned variant of [`filter_candidates`]
///
/// # Errors
/// Same as [`filter_candidates`].
///
/// # Examples
/// ```
/// use wordle_filter::core::{Guess, GuessHistory, Word};
/// use wordle_filter::filter::filter;
///
/// let dictionary: Vec<Word> = ["sweet", "sheep", "steel", "speed", "creek"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let history = GuessHistory::new().appended(Guess::parse("sleek:G-GG-").unwrap());
///
/// let remaining = filter(&dictionary, &history).unwrap();
/// let texts: Vec<&str> = remaining.iter().map(Word::text).collect();
/// assert_eq!(texts, ["sweet", "sheep", "speed"]);
/// ```
pub fn filter(dictionary: &[Word], history: &GuessHistory) -> Result<Vec<Word>, InvalidGuess> {
    Ok(filter_candidates(dictionary, history)?
        .into_iter()
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, evaluate};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn history(guesses: &[&str]) -> GuessHistory {
        guesses.iter().map(|g| Guess::parse(g).unwrap()).collect()
    }

    fn texts(list: &[Word]) -> Vec<&str> {
        list.iter().map(Word::text).collect()
    }

    const SAMPLE: &[&str] = &[
        "apple", "grape", "peach", "lemon", "mango", "melon", "berry", "plumb", "crane", "slate",
    ];

    #[test]
    fn empty_history_is_identity() {
        let dict = words(SAMPLE);
        assert_eq!(filter(&dict, &GuessHistory::new()).unwrap(), dict);

        let empty: Vec<Word> = Vec::new();
        assert!(filter(&empty, &GuessHistory::new()).unwrap().is_empty());
    }

    #[test]
    fn correct_letter_position() {
        let dict = words(&["apple", "angry", "allow", "azure", "amaze"]);
        let result = filter(&dict, &history(&["axxxx:G----"])).unwrap();
        assert_eq!(result, dict);
    }

    #[test]
    fn absent_letters() {
        let result = filter(&words(SAMPLE), &history(&["xxxyz:-----"])).unwrap();
        let result = texts(&result);
        assert!(result.contains(&"apple"));
        assert!(result.contains(&"peach"));
        assert!(!result.contains(&"berry")); // contains y
    }

    #[test]
    fn present_letters() {
        let result = filter(&words(SAMPLE), &history(&["exxxx:Y----"])).unwrap();
        for word in &result {
            assert_ne!(word.letter_at(0), b'e');
            assert!(word.has_letter(b'e'));
        }
        let result = texts(&result);
        assert!(result.contains(&"berry"));
        assert!(!result.contains(&"mango"));
    }

    #[test]
    fn correct_in_middle() {
        let dict = words(&[
            "peach", "beach", "reach", "leach", "teach", "mocha", "alpha", "meant",
        ]);
        let result = filter(&dict, &history(&["xxaxx:--G--"])).unwrap();
        assert_eq!(
            texts(&result),
            ["peach", "beach", "reach", "leach", "teach", "meant"]
        );
    }

    #[test]
    fn duplicate_letters_absent_duplicate() {
        let dict = words(&["sweet", "sheep", "steel", "speed", "creek"]);
        let result = filter(&dict, &history(&["sleek:G-GG-"])).unwrap();
        let result = texts(&result);

        assert!(result.contains(&"sweet"));
        assert!(result.contains(&"speed"));
        assert!(!result.contains(&"steel")); // has L
        assert!(!result.contains(&"creek")); // has K
    }

    #[test]
    fn letter_both_correct_and_absent() {
        let dict = words(&["trees", "tease", "teens"]);
        let result = filter(&dict, &history(&["teeth:GGG--"])).unwrap();
        assert_eq!(texts(&result), ["teens"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let result = filter(&words(SAMPLE), &history(&["zzzzz:GGGGG"])).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn all_correct_keeps_only_that_word() {
        let result = filter(&words(SAMPLE), &history(&["apple:GGGGG"])).unwrap();
        assert_eq!(texts(&result), ["apple"]);
    }

    #[test]
    fn case_insensitive() {
        let mixed = words(&["APPLE", "Grape", "peach"]);
        let lower = words(&["apple", "grape", "peach"]);
        let upper_guess = history(&["AXXXX:G----"]);
        let lower_guess = history(&["axxxx:G----"]);

        let a = filter(&mixed, &upper_guess).unwrap();
        let b = filter(&lower, &lower_guess).unwrap();
        assert_eq!(a, b);
        assert_eq!(texts(&a), ["apple"]);
    }

    #[test]
    fn multiple_guesses_combine() {
        let dict = words(&["crane", "crate", "grate", "irate", "slate"]);
        let result = filter(&dict, &history(&["slate:--GGG", "grate:-GGGG"])).unwrap();
        assert_eq!(texts(&result), ["crate", "irate"]);
    }

    #[test]
    fn history_order_does_not_matter() {
        let dict = words(SAMPLE);
        let forward = filter(&dict, &history(&["crane:--Y-Y", "plumb:-Y---"])).unwrap();
        let backward = filter(&dict, &history(&["plumb:-Y---", "crane:--Y-Y"])).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn idempotent() {
        let dict = words(SAMPLE);
        let h = history(&["slate:-Y--Y"]);
        let once = filter(&dict, &h).unwrap();
        let twice = filter(&once, &h).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn result_is_subsequence() {
        let dict = words(SAMPLE);
        let result = filter(&dict, &history(&["xxexx:-----"])).unwrap();

        let mut source = dict.iter();
        for word in &result {
            assert!(source.any(|w| w == word), "{word} out of order or added");
        }
    }

    #[test]
    fn secret_survives_its_own_evaluation() {
        let dict = words(&[
            "sleek", "teeth", "speed", "erase", "floor", "robot", "lolly", "world", "abide",
            "eerie", "geese", "sheep", "crane", "llama", "alley",
        ]);
        for secret in &dict {
            for guess in &dict {
                let pattern = evaluate(secret, guess).unwrap();
                let h = GuessHistory::new().appended(Guess::new(guess.clone(), pattern).unwrap());
                let remaining = filter_candidates(&dict, &h).unwrap();
                assert!(
                    remaining.contains(&secret),
                    "{secret} filtered out by its own evaluation of {guess}"
                );
            }
        }
    }

    #[test]
    fn candidate_length_mismatch_is_error() {
        let dict = words(&["crane", "cranes"]);
        let err = filter(&dict, &history(&["crane:-----"])).unwrap_err();
        assert!(matches!(err, InvalidGuess::WordLength { found: 6, .. }));
    }

    #[test]
    fn length_mismatch_reported_even_when_rejected_earlier() {
        let dict = words(&["cranes"]);
        let h = GuessHistory::new()
            .appended(Guess::parse("zzzzzz:GGGGGG").unwrap())
            .appended(Guess::parse("crane:-----").unwrap());
        assert!(filter(&dict, &h).is_err());
    }

    #[test]
    fn other_word_lengths() {
        let dict = words(&["ox", "on", "no", "so"]);
        let guess = Guess::new(Word::new("on").unwrap(), Pattern::parse("YY").unwrap()).unwrap();
        let result = filter(&dict, &GuessHistory::new().appended(guess)).unwrap();
        assert_eq!(texts(&result), ["no"]);
    }

    #[test]
    fn is_consistent_single_guess() {
        let guess = Guess::parse("sleek:G-GG-").unwrap();
        assert!(is_consistent(&Word::new("sweet").unwrap(), &guess).unwrap());
        assert!(!is_consistent(&Word::new("steel").unwrap(), &guess).unwrap());
        assert!(is_consistent(&Word::new("sweets").unwrap(), &guess).is_err());
    }
}
