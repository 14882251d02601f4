//! Hints built on the candidate filter
//!
//! Ranks guesses by Shannon entropy of the pattern distribution they induce
//! over the remaining candidates.

mod engine;
mod entropy;
mod selector;

pub use engine::Hinter;
pub use entropy::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::{RankedGuess, rank_guesses, select_best_guess};
