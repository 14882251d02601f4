//! Player statistics and recently played words
//!
//! The state is owned by the caller and moved in and out of a `StateStore`;
//! nothing here is global.

use std::collections::VecDeque;
use std::fmt;

/// How many recently played words are remembered
pub const PLAYED_WORDS_LIMIT: usize = 100;

/// Win/loss record across games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Index 0 counts wins in one guess
    pub guess_distribution: Vec<u32>,
    pub total_guesses: u32,
}

impl GameStats {
    /// Empty stats for games of up to `max_guesses` guesses
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: vec![0; max_guesses],
            total_guesses: 0,
        }
    }

    /// Record one finished game
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::game::GameStats;
    ///
    /// let mut stats = GameStats::default();
    /// stats.record(true, 3);
    /// stats.record(true, 4);
    /// stats.record(false, 6);
    ///
    /// assert_eq!(stats.games_played, 3);
    /// assert_eq!(stats.current_streak, 0);
    /// assert_eq!(stats.max_streak, 2);
    /// assert!((stats.average_guesses() - 3.5).abs() < f64::EPSILON);
    /// ```
    pub fn record(&mut self, won: bool, attempts: u32) {
        self.games_played += 1;

        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if let Some(i) = (attempts as usize).checked_sub(1) {
                if i >= self.guess_distribution.len() {
                    self.guess_distribution.resize(i + 1, 0);
                }
                self.guess_distribution[i] += 1;
            }
            self.total_guesses += attempts;
        } else {
            self.current_streak = 0;
        }
    }

    /// Average guesses per win, rounded to one decimal; 0 with no wins
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            return 0.0;
        }
        (f64::from(self.total_guesses) / f64::from(self.games_won) * 10.0).round() / 10.0
    }

    /// Percentage of games won, rounded; 0 with no games
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) / f64::from(self.games_played) * 100.0).round() as u32
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new(super::DEFAULT_MAX_GUESSES)
    }
}

/// Recently played secrets, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayedWords {
    words: VecDeque<String>,
}

impl PlayedWords {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: VecDeque::new(),
        }
    }

    /// Remember a word, dropping the oldest past the limit
    pub fn add(&mut self, word: &str) {
        let word = word.to_ascii_lowercase();
        if self.words.contains(&word) {
            return;
        }
        self.words.push_back(word);
        if self.words.len() > PLAYED_WORDS_LIMIT {
            self.words.pop_front();
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Outcome of the daily puzzle for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub day: i64,
    pub word: String,
    pub completed: bool,
    pub won: bool,
}

/// Everything remembered about a player between games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub stats: GameStats,
    pub played: PlayedWords,
    /// Most recent daily puzzle played
    pub daily: Option<DailyRecord>,
}

impl PlayerState {
    /// Whether the daily puzzle for `day` can still be played
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::game::PlayerState;
    ///
    /// let mut state = PlayerState::default();
    /// assert!(state.daily_available(19_800));
    ///
    /// state.record_daily(19_800, "sweet", true);
    /// assert!(!state.daily_available(19_800));
    /// assert!(state.daily_available(19_801));
    /// ```
    #[must_use]
    pub fn daily_available(&self, day: i64) -> bool {
        self.daily_result(day).is_none()
    }

    /// The completed daily record for `day`, if any
    #[must_use]
    pub fn daily_result(&self, day: i64) -> Option<&DailyRecord> {
        self.daily
            .as_ref()
            .filter(|record| record.day == day && record.completed)
    }

    /// Mark the daily puzzle for `day` as completed, replacing any older record
    pub fn record_daily(&mut self, day: i64, word: &str, won: bool) {
        self.daily = Some(DailyRecord {
            day,
            word: word.to_ascii_lowercase(),
            completed: true,
            won,
        });
    }
}

/// Error from a state store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Unavailable(String),
    Corrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "State store unavailable: {msg}"),
            Self::Corrupt(msg) => write!(f, "Stored state is corrupt: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Where player state is loaded from and saved to
pub trait StateStore {
    /// Load the stored state, or a fresh one if nothing was saved
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn load(&self) -> Result<PlayerState, StoreError>;

    /// Replace the stored state
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn save(&mut self, state: &PlayerState) -> Result<(), StoreError>;
}

/// A store that keeps state for the life of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Option<PlayerState>,
}

impl MemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { state: None }
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<PlayerState, StoreError> {
        Ok(self.state.clone().unwrap_or_default())
    }

    fn save(&mut self, state: &PlayerState) -> Result<(), StoreError> {
        self.state = Some(state.clone());
        Ok(())
    }
}
