//! Secret word selection
//!
//! The daily word is a pure function of the calendar day; practice words are
//! drawn at random while avoiding recently played ones.

use super::PlayedWords;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 60 * 60 * 24;

/// Day number (days since 1970-01-01) of the first daily puzzle, 2024-01-01
pub const PUZZLE_EPOCH_DAY: i64 = 19_723;

/// Days since 1970-01-01 for a proleptic Gregorian date
///
/// # Examples
/// ```
/// use wordle_filter::game::{PUZZLE_EPOCH_DAY, days_from_civil};
///
/// assert_eq!(days_from_civil(1970, 1, 1), 0);
/// assert_eq!(days_from_civil(2024, 1, 1), PUZZLE_EPOCH_DAY);
/// ```
#[must_use]
pub const fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month = month as i64;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// UTC day number of a point in time
#[must_use]
pub fn day_number(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_secs() / SECONDS_PER_DAY) as i64,
        Err(before) => -(before.duration().as_secs().div_ceil(SECONDS_PER_DAY) as i64),
    }
}

/// Position in a list of `len` words for the given day
///
/// Days before the epoch wrap around from the end. Returns `None` for an empty list.
#[must_use]
pub fn day_index(day: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((day - PUZZLE_EPOCH_DAY).rem_euclid(len as i64) as usize)
}

/// The daily word for a day number
#[must_use]
pub fn word_of_day(words: &[Word], day: i64) -> Option<&Word> {
    day_index(day, words.len()).map(|i| &words[i])
}

/// The daily word at a point in time
#[must_use]
pub fn word_of_day_at(words: &[Word], time: SystemTime) -> Option<&Word> {
    word_of_day(words, day_number(time))
}

/// A random word not among the recently played ones
///
/// Falls back to the whole list once everything has been played.
pub fn random_word<'a, R: Rng + ?Sized>(
    words: &'a [Word],
    played: &PlayedWords,
    rng: &mut R,
) -> Option<&'a Word> {
    let fresh: Vec<&Word> = words.iter().filter(|w| !played.contains(w.text())).collect();

    if fresh.is_empty() {
        words.choose(rng)
    } else {
        fresh.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn civil_days_known_dates() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(days_from_civil(2024, 1, 1), PUZZLE_EPOCH_DAY);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
    }

    #[test]
    fn day_number_from_time() {
        let noon = UNIX_EPOCH + Duration::from_secs(19_723 * SECONDS_PER_DAY + 12 * 3600);
        assert_eq!(day_number(noon), PUZZLE_EPOCH_DAY);

        let before = UNIX_EPOCH - Duration::from_secs(10);
        assert_eq!(day_number(before), -1);
    }

    #[test]
    fn day_index_wraps() {
        assert_eq!(day_index(PUZZLE_EPOCH_DAY, 3), Some(0));
        assert_eq!(day_index(PUZZLE_EPOCH_DAY + 4, 3), Some(1));
        assert_eq!(day_index(PUZZLE_EPOCH_DAY - 1, 3), Some(2));
        assert_eq!(day_index(PUZZLE_EPOCH_DAY, 0), None);
    }

    #[test]
    fn word_of_day_is_deterministic() {
        let list = words(&["crane", "slate", "sleek"]);
        let day = days_from_civil(2024, 1, 2);

        assert_eq!(word_of_day(&list, day).unwrap().text(), "slate");
        assert_eq!(word_of_day(&list, day), word_of_day(&list, day));
        assert!(word_of_day(&[], day).is_none());
    }

    #[test]
    fn word_of_day_at_time() {
        let list = words(&["crane", "slate", "sleek"]);
        let time = UNIX_EPOCH + Duration::from_secs((PUZZLE_EPOCH_DAY as u64 + 2) * SECONDS_PER_DAY);
        assert_eq!(word_of_day_at(&list, time).unwrap().text(), "sleek");
    }

    #[test]
    fn random_word_avoids_played() {
        let list = words(&["crane", "slate", "sleek"]);
        let mut played = PlayedWords::new();
        played.add("crane");
        played.add("sleek");

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(random_word(&list, &played, &mut rng).unwrap().text(), "slate");
        }
    }

    #[test]
    fn random_word_falls_back_when_all_played() {
        let list = words(&["crane", "slate"]);
        let mut played = PlayedWords::new();
        played.add("crane");
        played.add("slate");

        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_word(&list, &played, &mut rng).is_some());
        assert!(random_word(&[], &played, &mut rng).is_none());
    }
}
