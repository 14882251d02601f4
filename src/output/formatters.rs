//! Formatting utilities for terminal output

use crate::core::{Guess, LetterMark};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: u8, mark: LetterMark) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match mark {
        LetterMark::Correct => text.black().on_green().bold(),
        LetterMark::Present => text.black().on_yellow().bold(),
        LetterMark::Absent => text.white().on_bright_black(),
    }
}

/// A guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(guess: &Guess) -> String {
    guess
        .word()
        .letters()
        .iter()
        .zip(guess.pattern().marks())
        .map(|(&letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled against the best possible split of `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
