//! Wordle Filter
//!
//! Guess evaluation and guess-constraint filtering for Wordle-style puzzles,
//! with entropy hints and a small game layer built on top.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::core::{Guess, GuessHistory, Word, evaluate};
//! use wordle_filter::filter::filter;
//!
//! let dictionary: Vec<Word> = ["trees", "tease", "teens"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let secret = Word::new("teens").unwrap();
//! let guess = Word::new("teeth").unwrap();
//! let pattern = evaluate(&secret, &guess).unwrap();
//!
//! let history = GuessHistory::new().appended(Guess::new(guess, pattern).unwrap());
//! let remaining = filter(&dictionary, &history).unwrap();
//! assert_eq!(remaining, vec![secret]);
//! ```

// Core domain types
pub mod core;

// Candidate filtering
pub mod filter;

// Entropy hints
pub mod hint;

// Rounds, statistics, word selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

/// Word length of the reference game
pub const WORD_LENGTH: usize = 5;
