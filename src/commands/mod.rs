//! Command implementations

pub mod bench;
pub mod daily;
pub mod evaluate;
pub mod filter;
pub mod hint;
pub mod play;

pub use bench::{BenchResult, play_out, run_bench};
pub use daily::{DailyResult, daily_word};
pub use evaluate::{EvaluationResult, evaluate_words};
pub use filter::{FilterResult, parse_history, run_filter};
pub use hint::{HintLine, HintResult, suggest};
pub use play::{PlayOptions, run_play};
