//! Core domain types for the word game
//!
//! Words, marks, guesses and the evaluator that produces marks. Everything here
//! is pure and independent of word length.

mod evaluate;
mod guess;
mod pattern;
mod word;

pub use evaluate::evaluate;
pub use guess::{Guess, GuessHistory, InvalidGuess};
pub use pattern::{LetterMark, Pattern};
pub use word::{Word, WordError};
