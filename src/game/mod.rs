//! Game layer on top of the evaluator and filter
//!
//! Rounds, player statistics and secret selection. Player state is passed in
//! explicitly and persisted only through a caller-supplied `StateStore`.

mod daily;
mod session;
mod stats;

pub use daily::{
    PUZZLE_EPOCH_DAY, day_index, day_number, days_from_civil, random_word, word_of_day,
    word_of_day_at,
};
pub use session::{GameConfig, GameError, GameSession, GameStatus};
pub use stats::{
    DailyRecord, GameStats, MemoryStore, PLAYED_WORDS_LIMIT, PlayedWords, PlayerState, StateStore,
    StoreError,
};

/// Guesses allowed per round in the reference game
pub const DEFAULT_MAX_GUESSES: usize = 6;
