//! Annotated guesses and the history they accumulate into

use super::{Pattern, Word};
use std::fmt;

/// A guess whose marks do not line up with the words it is compared to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    /// The pattern has a different number of marks than the word has letters
    MarkCount { word: String, marks: usize },
    /// A word was compared against a guess of a different length
    WordLength {
        word: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkCount { word, marks } => write!(
                f,
                "Invalid guess: '{word}' has {} letters but {marks} marks",
                word.len()
            ),
            Self::WordLength {
                word,
                expected,
                found,
            } => write!(
                f,
                "Invalid guess: '{word}' has {found} letters, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for InvalidGuess {}

/// A submitted word together with its per-letter marks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    word: Word,
    pattern: Pattern,
}

impl Guess {
    /// Pair a word with its pattern
    ///
    /// # Errors
    /// Returns `InvalidGuess::MarkCount` if the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Guess, Pattern, Word};
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert!(Guess::new(word.clone(), Pattern::parse("G----").unwrap()).is_ok());
    /// assert!(Guess::new(word, Pattern::parse("G--").unwrap()).is_err());
    /// ```
    pub fn new(word: Word, pattern: Pattern) -> Result<Self, InvalidGuess> {
        if word.len() != pattern.len() {
            return Err(InvalidGuess::MarkCount {
                word: word.text().to_string(),
                marks: pattern.len(),
            });
        }
        Ok(Self { word, pattern })
    }

    /// Parse a `word:pattern` pair such as `crane:GY---`
    ///
    /// # Errors
    /// Returns a description of the first problem found.
    pub fn parse(s: &str) -> Result<Self, String> {
        let (word, pattern) = s
            .split_once(':')
            .ok_or_else(|| format!("Expected WORD:PATTERN, got '{s}'"))?;
        let word = Word::new(word.trim()).map_err(|e| format!("Invalid word in '{s}': {e}"))?;
        let pattern = pattern.trim().parse::<Pattern>()?;
        Self::new(word, pattern).map_err(|e| e.to_string())
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Number of letters in the guess
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Check if the guess was entirely correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pattern.is_perfect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word.text().to_uppercase(), self.pattern)
    }
}

/// Guesses in submission order
///
/// A history only grows by appending; existing guesses are never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    guesses: Vec<Guess>,
}

impl GuessHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            guesses: Vec::new(),
        }
    }

    /// Produce the history with `guess` appended
    #[must_use]
    pub fn appended(mut self, guess: Guess) -> Self {
        self.push(guess);
        self
    }

    /// Append `guess` in place and return the stored guess
    pub fn push(&mut self, guess: Guess) -> &Guess {
        let index = self.guesses.len();
        self.guesses.push(guess);
        &self.guesses[index]
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Guess> {
        self.guesses.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Guess> {
        self.guesses.last()
    }
}

impl FromIterator<Guess> for GuessHistory {
    fn from_iter<I: IntoIterator<Item = Guess>>(iter: I) -> Self {
        Self {
            guesses: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Guess>> for GuessHistory {
    fn from(guesses: Vec<Guess>) -> Self {
        Self { guesses }
    }
}

impl<'a> IntoIterator for &'a GuessHistory {
    type Item = &'a Guess;
    type IntoIter = std::slice::Iter<'a, Guess>;

    fn into_iter(self) -> Self::IntoIter {
        self.guesses.iter()
    }
}

impl AsRef<[Guess]> for GuessHistory {
    fn as_ref(&self) -> &[Guess] {
        &self.guesses
    }
}
