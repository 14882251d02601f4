//! Hint engine
//!
//! Filters the dictionary by the history so far and suggests the next guess.

use super::entropy::GuessMetrics;
use super::selector::{RankedGuess, rank_guesses, select_best_guess};
use crate::core::{GuessHistory, InvalidGuess, Word};
use crate::filter::filter_candidates;
use log::trace;

/// Suggests guesses for a game in progress
pub struct Hinter<'a> {
    guess_pool: &'a [Word],
    dictionary: &'a [Word],
}

impl<'a> Hinter<'a> {
    /// Create a hinter
    ///
    /// # Parameters
    /// - `guess_pool`: Words that may be suggested
    /// - `dictionary`: Words that may be the secret
    #[must_use]
    pub const fn new(guess_pool: &'a [Word], dictionary: &'a [Word]) -> Self {
        Self {
            guess_pool,
            dictionary,
        }
    }

    /// Current candidates given the history
    ///
    /// # Errors
    /// Propagates `InvalidGuess` from the filter.
    pub fn candidates(&self, history: &GuessHistory) -> Result<Vec<&'a Word>, InvalidGuess> {
        filter_candidates(self.dictionary, history)
    }

    /// Best next guess, or `None` if no candidate remains
    ///
    /// With a single candidate left it is returned directly.
    ///
    /// # Errors
    /// Propagates `InvalidGuess` from the filter or the scorer.
    pub fn next_hint(&self, history: &GuessHistory) -> Result<Option<RankedGuess<'a>>, InvalidGuess> {
        let candidates = self.candidates(history)?;
        trace!("hinting over {} candidates", candidates.len());

        match candidates.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(RankedGuess {
                word: *only,
                metrics: GuessMetrics {
                    entropy: 0.0,
                    expected_remaining: 1.0,
                    max_partition: 1,
                },
                is_candidate: true,
            })),
            _ => select_best_guess(self.guess_pool, &candidates),
        }
    }

    /// The `n` best guesses given the history
    ///
    /// # Errors
    /// Propagates `InvalidGuess` from the filter or the scorer.
    pub fn top_hints(
        &self,
        history: &GuessHistory,
        n: usize,
    ) -> Result<Vec<RankedGuess<'a>>, InvalidGuess> {
        let candidates = self.candidates(history)?;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        rank_guesses(self.guess_pool, &candidates, n)
    }
}
