//! Constraints implied by a single annotated guess
//!
//! A guess is compiled once into position requirements and per-letter bounds,
//! then checked against any number of candidates.

use crate::core::{Guess, InvalidGuess, LetterMark, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// What one guess says about the number of occurrences of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterBound {
    /// A `Present` mark demands at least one occurrence
    required: bool,
    /// An `Absent` mark caps occurrences at the number of positive marks
    max: Option<usize>,
}

/// Compiled form of one guess
#[derive(Debug, Clone)]
pub struct GuessConstraint {
    /// Letter pinned at each position by a `Correct` mark
    fixed: Vec<Option<u8>>,
    /// (position, letter) pairs ruled out by `Present` marks
    excluded: Vec<(usize, u8)>,
    bounds: FxHashMap<u8, LetterBound>,
}

impl GuessConstraint {
    /// Compile a guess
    ///
    /// For each letter the number of confirmed occurrences `k` is the count of
    /// its `Correct` and `Present` marks in this guess alone. If the letter also
    /// has an `Absent` mark, a candidate may hold at most `k` of it, which is
    /// zero when every occurrence was marked absent.
    #[must_use]
    pub fn from_guess(guess: &Guess) -> Self {
        let letters = guess.word().letters();
        let marks = guess.pattern().marks();

        let mut fixed = vec![None; letters.len()];
        let mut excluded = Vec::new();
        let mut confirmed: FxHashMap<u8, usize> = FxHashMap::default();
        let mut capped: FxHashSet<u8> = FxHashSet::default();
        let mut required: FxHashSet<u8> = FxHashSet::default();

        for (i, (&letter, &mark)) in letters.iter().zip(marks).enumerate() {
            let count = confirmed.entry(letter).or_insert(0);
            if mark.is_positive() {
                *count += 1;
            }
            match mark {
                LetterMark::Correct => fixed[i] = Some(letter),
                LetterMark::Present => {
                    excluded.push((i, letter));
                    required.insert(letter);
                }
                LetterMark::Absent => {
                    capped.insert(letter);
                }
            }
        }

        let bounds = confirmed
            .into_iter()
            .map(|(letter, k)| {
                let bound = LetterBound {
                    required: required.contains(&letter),
                    max: capped.contains(&letter).then_some(k),
                };
                (letter, bound)
            })
            .collect();

        Self {
            fixed,
            excluded,
            bounds,
        }
    }

    /// Word length this constraint applies to
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixed.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty()
    }

    /// Reject candidates of the wrong length
    ///
    /// # Errors
    /// Returns `InvalidGuess::WordLength` on mismatch.
    pub fn check_length(&self, candidate: &Word) -> Result<(), InvalidGuess> {
        if candidate.len() == self.len() {
            Ok(())
        } else {
            Err(InvalidGuess::WordLength {
                word: candidate.text().to_string(),
                expected: self.len(),
                found: candidate.len(),
            })
        }
    }

    /// Check a candidate of the right length against every rule
    fn allows(&self, candidate: &Word) -> bool {
        let letters = candidate.letters();

        let fixed_ok = self
            .fixed
            .iter()
            .zip(letters)
            .all(|(fixed, &letter)| fixed.is_none_or(|f| f == letter));
        if !fixed_ok {
            return false;
        }

        if self.excluded.iter().any(|&(i, letter)| letters[i] == letter) {
            return false;
        }

        self.bounds.iter().all(|(&letter, bound)| {
            let count = candidate.count_of(letter);
            if bound.required && count == 0 {
                return false;
            }
            bound.max.is_none_or(|max| count <= max)
        })
    }

    /// Check a candidate against the position rules and letter bounds
    ///
    /// # Errors
    /// Returns `InvalidGuess::WordLength` on mismatch.
    pub fn matches(&self, candidate: &Word) -> Result<bool, InvalidGuess> {
        self.check_length(candidate)?;
        Ok(self.allows(candidate))
    }
}
