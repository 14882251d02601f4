//! Word lists
//!
//! The embedded reference list and loading of caller-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
