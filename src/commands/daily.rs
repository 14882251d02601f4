//! Daily word command

use crate::core::Word;
use crate::game::{day_index, day_number};
use std::time::SystemTime;

/// Today's puzzle
pub struct DailyResult {
    pub day: i64,
    pub index: usize,
    pub word: String,
}

/// Select the daily word for `time`
///
/// # Errors
///
/// Returns an error if the word list is empty.
pub fn daily_word(words: &[Word], time: SystemTime) -> Result<DailyResult, String> {
    let day = day_number(time);
    let index = day_index(day, words.len()).ok_or("Word list is empty")?;

    Ok(DailyResult {
        day,
        index,
        word: words[index].text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{PUZZLE_EPOCH_DAY, days_from_civil};
    use crate::wordlists::loader::words_from_slice;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn picks_by_day() {
        let words = words_from_slice(&["crane", "slate", "sleek"]);
        let day = days_from_civil(2024, 1, 5);
        let time = UNIX_EPOCH + Duration::from_secs(day as u64 * 86_400);

        let result = daily_word(&words, time).unwrap();
        assert_eq!(result.day, PUZZLE_EPOCH_DAY + 4);
        assert_eq!(result.index, 1);
        assert_eq!(result.word, "slate");
    }

    #[test]
    fn empty_list_is_error() {
        assert!(daily_word(&[], SystemTime::now()).is_err());
    }
}
