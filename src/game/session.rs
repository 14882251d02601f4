//! A single round against a secret word

use super::{DEFAULT_MAX_GUESSES, PlayerState};
use crate::core::{Guess, GuessHistory, InvalidGuess, Word, WordError, evaluate};
use crate::filter::{filter_candidates, is_consistent};
use log::debug;
use std::fmt;

/// Options for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    /// Every guess must be consistent with the marks seen so far
    pub hard_mode: bool,
    /// Guesses must appear in the dictionary
    pub require_known_word: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            hard_mode: false,
            require_known_word: true,
        }
    }
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a submitted word was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Finished,
    NotFinished,
    Word(WordError),
    WrongLength { expected: usize, found: usize },
    UnknownWord(String),
    HardMode(String),
    Invalid(InvalidGuess),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "The game is already over"),
            Self::NotFinished => write!(f, "The game is still in progress"),
            Self::Word(e) => write!(f, "{e}"),
            Self::WrongLength { expected, found } => {
                write!(f, "Guess must be {expected} letters, got {found}")
            }
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the word list"),
            Self::HardMode(word) => {
                write!(f, "'{word}' does not use every revealed hint (hard mode)")
            }
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<InvalidGuess> for GameError {
    fn from(e: InvalidGuess) -> Self {
        Self::Invalid(e)
    }
}

/// One round: a secret, the guesses so far and the outcome
pub struct GameSession<'a> {
    secret: Word,
    dictionary: &'a [Word],
    history: GuessHistory,
    config: GameConfig,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(secret: Word, dictionary: &'a [Word], config: GameConfig) -> Self {
        debug!(
            "new game: {} letters, {} guesses, hard mode {}",
            secret.len(),
            config.max_guesses,
            config.hard_mode
        );
        Self {
            secret,
            dictionary,
            history: GuessHistory::new(),
            config,
            status: GameStatus::InProgress,
        }
    }

    /// Evaluate a word and append it to the history
    ///
    /// # Errors
    /// Returns `GameError` if the game is over or the word is refused; the
    /// history is unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Word;
    /// use wordle_filter::game::{GameConfig, GameSession, GameStatus};
    ///
    /// let dictionary: Vec<Word> = ["crane", "teeth", "teens"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let secret = Word::new("teens").unwrap();
    /// let mut game = GameSession::new(secret, &dictionary, GameConfig::default());
    ///
    /// let guess = game.submit("TEETH").unwrap();
    /// assert_eq!(guess.pattern().to_emoji(), "🟩🟩🟩⬜⬜");
    ///
    /// game.submit("teens").unwrap();
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn submit(&mut self, text: &str) -> Result<&Guess, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::Finished);
        }

        let word = Word::new(text.trim())?;

        if word.len() != self.secret.len() {
            return Err(GameError::WrongLength {
                expected: self.secret.len(),
                found: word.len(),
            });
        }

        if self.config.require_known_word && !self.dictionary.contains(&word) {
            return Err(GameError::UnknownWord(word.text().to_string()));
        }

        if self.config.hard_mode {
            for previous in &self.history {
                if !is_consistent(&word, previous)? {
                    return Err(GameError::HardMode(word.text().to_string()));
                }
            }
        }

        let pattern = evaluate(&self.secret, &word)?;
        let guess = Guess::new(word, pattern)?;
        let turn = self.history.len() + 1;

        if guess.is_solved() {
            self.status = GameStatus::Won;
        } else if turn >= self.config.max_guesses {
            self.status = GameStatus::Lost;
        }
        debug!(
            "guess {turn} of {}: {:?}",
            self.config.max_guesses, self.status
        );

        Ok(self.history.push(guess))
    }

    /// Dictionary words still consistent with the history
    ///
    /// # Errors
    /// Propagates `InvalidGuess` if the dictionary holds words of another length.
    pub fn remaining_candidates(&self) -> Result<Vec<&'a Word>, InvalidGuess> {
        filter_candidates(self.dictionary, &self.history)
    }

    /// Add a finished round to the player's state
    ///
    /// # Errors
    /// Returns `GameError::NotFinished` while the round is in progress.
    pub fn finish_into(&self, state: &mut PlayerState) -> Result<(), GameError> {
        let won = match self.status {
            GameStatus::InProgress => return Err(GameError::NotFinished),
            GameStatus::Won => true,
            GameStatus::Lost => false,
        };
        state.stats.record(won, self.history.len() as u32);
        state.played.add(self.secret.text());
        Ok(())
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Guesses left before the round is lost
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.history.len())
    }

    /// The secret, only once the round is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        (self.status != GameStatus::InProgress).then_some(&self.secret)
    }
}
