//! Per-letter feedback marks and the pattern they form
//!
//! A pattern is the ordered list of marks produced for one guess:
//! - `Correct` (green): letter at the right position
//! - `Present` (yellow): letter in the word, elsewhere
//! - `Absent` (gray): no further occurrence of the letter

use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterMark {
    Correct,
    Present,
    Absent,
}

impl LetterMark {
    /// Parse one mark character
    ///
    /// Accepts `G`/🟩 for correct, `Y`/🟨 for present and
    /// `-`, `_`, `.`, `B`, `X`, ⬜, ⬛ for absent (letters in either case).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | 'B' | 'b' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square for display
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Whether this mark confirms an occurrence of the letter
    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }
}

/// The marks for one guess, in position order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<LetterMark>);

impl Pattern {
    /// Wrap a list of marks
    #[must_use]
    pub const fn new(marks: Vec<LetterMark>) -> Self {
        Self(marks)
    }

    /// A pattern of `len` correct marks
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![LetterMark::Correct; len])
    }

    /// The marks as a slice
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[LetterMark] {
        &self.0
    }

    /// Number of marks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every mark is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == LetterMark::Correct)
    }

    /// Count the number of correct marks
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&m| m == LetterMark::Correct).count()
    }

    /// Count the number of present marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == LetterMark::Present).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{LetterMark, Pattern};
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.marks()[2], LetterMark::Absent);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks: Option<Vec<_>> = s.chars().map(LetterMark::from_char).collect();
        marks.filter(|m| !m.is_empty()).map(Self)
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl From<Vec<LetterMark>> for Pattern {
    fn from(marks: Vec<LetterMark>) -> Self {
        Self(marks)
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
