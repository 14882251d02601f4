//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_bench_result, print_daily, print_evaluation, print_filter_result, print_hints,
};
