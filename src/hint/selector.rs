//! Entropy-ranked guess selection
//!
//! Scores every word in a guess pool in parallel and ranks by expected
//! information gain.

use super::entropy::{GuessMetrics, calculate_metrics};
use crate::core::{InvalidGuess, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess<'a> {
    pub word: &'a Word,
    pub metrics: GuessMetrics,
    /// The word is itself still a possible answer
    pub is_candidate: bool,
}

impl RankedGuess<'_> {
    /// Higher entropy first, then possible answers, then smaller worst case
    fn cmp_quality(&self, other: &Self) -> Ordering {
        self.metrics
            .entropy
            .total_cmp(&other.metrics.entropy)
            .then(self.is_candidate.cmp(&other.is_candidate))
            .then(other.metrics.max_partition.cmp(&self.metrics.max_partition))
    }
}

fn score_pool<'a>(
    guess_pool: &'a [Word],
    candidates: &[&Word],
) -> Result<Vec<RankedGuess<'a>>, InvalidGuess> {
    let candidate_set: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();

    guess_pool
        .par_iter()
        .map(|guess| -> Result<RankedGuess<'a>, InvalidGuess> {
            Ok(RankedGuess {
                word: guess,
                metrics: calculate_metrics(guess, candidates)?,
                is_candidate: candidate_set.contains(guess.text()),
            })
        })
        .collect()
}

/// Select the guess with the highest entropy
///
/// Ties go to words that are still candidates. Returns `None` if the pool is empty.
///
/// # Errors
/// Returns `InvalidGuess::WordLength` if pool and candidate lengths disagree.
///
/// # Examples
/// ```
/// use wordle_filter::core::Word;
/// use wordle_filter::hint::select_best_guess;
///
/// let pool = vec![Word::new("aaaaa").unwrap(), Word::new("aeros").unwrap()];
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let best = select_best_guess(&pool, &candidate_refs).unwrap().unwrap();
/// assert_eq!(best.word.text(), "aeros");
/// ```
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[&Word],
) -> Result<Option<RankedGuess<'a>>, InvalidGuess> {
    Ok(score_pool(guess_pool, candidates)?
        .into_iter()
        .max_by(RankedGuess::cmp_quality))
}

/// The `n` best guesses, best first
///
/// # Errors
/// Returns `InvalidGuess::WordLength` if pool and candidate lengths disagree.
pub fn rank_guesses<'a>(
    guess_pool: &'a [Word],
    candidates: &[&Word],
    n: usize,
) -> Result<Vec<RankedGuess<'a>>, InvalidGuess> {
    let mut ranked = score_pool(guess_pool, candidates)?;
    ranked.par_sort_by(|a, b| b.cmp_quality(a));
    ranked.truncate(n);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let pool = words(&["aaaaa", "aeros"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let best = select_best_guess(&pool, &refs).unwrap().unwrap();
        assert_eq!(best.word.text(), "aeros");
        assert!(best.metrics.entropy > 0.5);
        assert!(!best.is_candidate);
    }

    #[test]
    fn tie_prefers_candidate() {
        // Both split {slate, zzzzy} evenly; SLATE could also be the answer
        let pool = words(&["zzzzz", "slate"]);
        let candidates = words(&["slate", "zzzzy"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let best = select_best_guess(&pool, &refs).unwrap().unwrap();
        assert_eq!(best.word.text(), "slate");
        assert!(best.is_candidate);
    }

    fn ranked<'a>(word: &'a Word, entropy: f64, max_partition: usize) -> RankedGuess<'a> {
        RankedGuess {
            word,
            metrics: GuessMetrics {
                entropy,
                expected_remaining: 1.0,
                max_partition,
            },
            is_candidate: false,
        }
    }

    #[test]
    fn equal_entropy_prefers_smaller_worst_case() {
        let pool = words(&["crane", "slate"]);
        let wide = ranked(&pool[0], 1.5, 3);
        let narrow = ranked(&pool[1], 1.5, 2);

        let best = [wide, narrow].into_iter().max_by(RankedGuess::cmp_quality).unwrap();
        assert_eq!(best.word.text(), "slate");

        let mut order = vec![narrow, wide];
        order.sort_by(|a, b| b.cmp_quality(a));
        assert_eq!(order[0].word.text(), "slate");
        assert_eq!(order[1].word.text(), "crane");
    }

    #[test]
    fn entropy_outranks_worst_case() {
        let pool = words(&["crane", "slate"]);
        let higher = ranked(&pool[0], 1.6, 5);
        let narrow = ranked(&pool[1], 1.5, 1);

        assert_eq!(higher.cmp_quality(&narrow), Ordering::Greater);
    }

    #[test]
    fn empty_pool_returns_none() {
        let candidates = words(&["slate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        assert!(select_best_guess(&[], &refs).unwrap().is_none());
    }

    #[test]
    fn rank_orders_best_first() {
        let pool = words(&["aaaaa", "aeros", "crane", "zzzzz"]);
        let candidates = words(&["slate", "irate", "crate", "grate", "trace"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let ranked = rank_guesses(&pool, &refs, 3).unwrap();
        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].metrics.entropy >= pair[1].metrics.entropy);
        }
        assert_ne!(ranked[0].word.text(), "zzzzz");
    }

    #[test]
    fn length_mismatch_propagates() {
        let pool = words(&["slates"]);
        let candidates = words(&["slate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        assert!(select_best_guess(&pool, &refs).is_err());
    }
}
