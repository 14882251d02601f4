//! Shannon entropy of the pattern distribution a guess induces
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{InvalidGuess, Pattern, Word, evaluate};
use rustc_hash::FxHashMap;

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

impl GuessMetrics {
    pub const EMPTY: Self = Self {
        entropy: 0.0,
        expected_remaining: 0.0,
        max_partition: 0,
    };
}

/// Calculate Shannon entropy for a guess against candidates
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Errors
/// Returns `InvalidGuess::WordLength` if a candidate differs in length from the guess.
///
/// # Examples
/// ```
/// use wordle_filter::core::Word;
/// use wordle_filter::hint::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs).unwrap();
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> Result<f64, InvalidGuess> {
    if candidates.is_empty() {
        return Ok(0.0);
    }

    let pattern_counts = group_by_pattern(guess, candidates)?;
    Ok(shannon_entropy(pattern_counts.values().copied()))
}

/// Count candidates by the pattern they produce with the guess
fn group_by_pattern(
    guess: &Word,
    candidates: &[&Word],
) -> Result<FxHashMap<Pattern, usize>, InvalidGuess> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = evaluate(candidate, guess)?;
        *counts.entry(pattern).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Shannon entropy of a distribution given as bucket sizes
///
/// - 0.0 for a certain outcome (one bucket)
/// - maximised by a uniform distribution, bounded by log₂(buckets)
#[must_use]
pub fn shannon_entropy(counts: impl IntoIterator<Item = usize> + Clone) -> f64 {
    let total = counts.clone().into_iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining candidates and worst-case partition
///
/// # Errors
/// Returns `InvalidGuess::WordLength` if a candidate differs in length from the guess.
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> Result<GuessMetrics, InvalidGuess> {
    if candidates.is_empty() {
        return Ok(GuessMetrics::EMPTY);
    }

    let groups = group_by_pattern(guess, candidates)?;
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(groups.values().copied());

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| size as f64 * size as f64 / total)
        .sum();

    let max_partition = groups.values().copied().max().unwrap_or(0);

    Ok(GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let entropy = shannon_entropy([1, 1, 1, 1]);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        assert!(shannon_entropy([10]).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_lower_than_uniform() {
        assert!(shannon_entropy([25, 25, 25, 25]) > shannon_entropy([97, 1, 1, 1]));
    }

    #[test]
    fn shannon_entropy_bounds() {
        let entropy = shannon_entropy([10, 20, 30]);
        assert!(entropy >= 0.0);
        assert!(entropy <= 3f64.log2());
    }

    #[test]
    fn shannon_entropy_empty() {
        assert!(shannon_entropy(Vec::new()).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_real_words() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let entropy = calculate_entropy(&guess, &refs).unwrap();
        assert!(entropy > 1.0 && entropy <= 2.0);
    }

    #[test]
    fn entropy_all_same_pattern() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert!(calculate_entropy(&guess, &refs).unwrap().abs() < 0.001);
    }

    #[test]
    fn entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let entropy = calculate_entropy(&guess, &refs).unwrap();
        assert!((entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn entropy_length_mismatch() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slates"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert!(calculate_entropy(&guess, &refs).is_err());
    }

    #[test]
    fn metrics_partition_sizes() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "zzzzz"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let metrics = calculate_metrics(&guess, &refs).unwrap();
        // Buckets: {aaaaa, bbbbb} and {zzzzz}
        assert_eq!(metrics.max_partition, 2);
        assert!((metrics.expected_remaining - 5.0 / 3.0).abs() < 0.001);
        assert!(metrics.entropy > 0.9 && metrics.entropy < 1.0);
    }

    #[test]
    fn metrics_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        assert_eq!(calculate_metrics(&guess, &[]).unwrap(), GuessMetrics::EMPTY);
    }
}
