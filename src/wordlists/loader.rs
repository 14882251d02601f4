//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Parse one word per line
///
/// Blank lines, invalid words and, when `length` is given, words of any other
/// length are skipped. Words are lower-cased.
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::words_from_str;
///
/// let words = words_from_str("Crane\n\nsl4te\ncranes\nsleek\n", Some(5));
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "sleek"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str, length: Option<usize>) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| length.is_none_or(|len| word.len() == len))
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", Some(5)).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: Option<usize>) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = words_from_str(&content, length);
    debug!("loaded {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::words_from_slice;
/// use wordle_filter::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
