//! Bench command
//!
//! Plays the hint engine against a set of secrets and collects statistics.

use crate::core::{Guess, GuessHistory, Word, evaluate};
use crate::hint::Hinter;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from a bench run
#[derive(Debug)]
pub struct BenchResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    /// Guess count to number of secrets solved in that many guesses
    pub distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub duration: Duration,
}

/// Solve one secret with the hint engine, returning the guesses made
///
/// # Errors
///
/// Returns an error if the secret's length does not match the word lists.
pub fn play_out(
    hinter: &Hinter<'_>,
    secret: &Word,
    max_guesses: usize,
) -> Result<Vec<Guess>, String> {
    let mut history = GuessHistory::new();

    while history.len() < max_guesses {
        let Some(hint) = hinter.next_hint(&history).map_err(|e| e.to_string())? else {
            break;
        };

        let pattern = evaluate(secret, hint.word).map_err(|e| e.to_string())?;
        let guess = Guess::new(hint.word.clone(), pattern).map_err(|e| e.to_string())?;
        let solved = guess.is_solved();
        history = history.appended(guess);

        if solved {
            break;
        }
    }

    Ok(history.as_slice().to_vec())
}

/// Run the hint engine on every secret in `secrets`
///
/// Shows a progress bar unless `quiet` is set.
///
/// # Errors
///
/// Returns an error if a secret's length does not match the word lists.
pub fn run_bench(
    hinter: &Hinter<'_>,
    secrets: &[Word],
    max_guesses: usize,
    quiet: bool,
) -> Result<BenchResult, String> {
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(secrets.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_err(|e| e.to_string())?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed = Vec::new();
    let mut solved_guesses = 0;

    for (idx, secret) in secrets.iter().enumerate() {
        let guesses = play_out(hinter, secret, max_guesses)?;

        if guesses.last().is_some_and(Guess::is_solved) {
            *distribution.entry(guesses.len()).or_insert(0) += 1;
            solved_guesses += guesses.len();
        } else {
            failed.push(secret.text().to_string());
        }

        if idx % 10 == 0 {
            let solved: usize = distribution.values().sum();
            if solved > 0 {
                pb.set_message(format!("Avg: {:.2}", solved_guesses as f64 / solved as f64));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let solved: usize = distribution.values().sum();
    let average_guesses = if solved == 0 {
        0.0
    } else {
        solved_guesses as f64 / solved as f64
    };

    Ok(BenchResult {
        total_words: secrets.len(),
        solved,
        failed,
        distribution,
        average_guesses,
        duration: start.elapsed(),
    })
}
