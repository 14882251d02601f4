//! Interactive play mode
//!
//! Text-based game against a random or daily secret.

use crate::core::Word;
use crate::game::{
    GameConfig, GameSession, GameStats, GameStatus, PlayerState, StateStore, random_word,
    word_of_day,
};
use crate::output::formatters::guess_tiles;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// How a play session picks its secrets
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    pub config: GameConfig,
    /// Day number of a daily puzzle to play once instead of random rounds
    pub daily: Option<i64>,
}

/// Play rounds until the player quits or declines another game
///
/// Every finished round is recorded into the state held by `store`. A daily
/// puzzle already completed for its day is not played again; its result is
/// shown instead. Returns the player state as it stands at the end.
///
/// # Errors
///
/// Returns an error on I/O failure, an empty dictionary or a store failure.
pub fn run_play<S, R, W, G>(
    dictionary: &[Word],
    options: PlayOptions,
    store: &mut S,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<PlayerState, String>
where
    S: StateStore,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut state = store.load().map_err(|e| e.to_string())?;

    writeln!(out, "\n{}", "Wordle".bright_cyan().bold()).map_err(|e| e.to_string())?;
    writeln!(
        out,
        "Find the word in {} guesses{}. Type 'quit' to exit.\n",
        options.config.max_guesses,
        if options.config.hard_mode { " (hard mode)" } else { "" }
    )
    .map_err(|e| e.to_string())?;

    if let Some(record) = options.daily.and_then(|day| state.daily_result(day)) {
        let outcome = if record.won {
            "solved".green()
        } else {
            "missed".red()
        };
        writeln!(
            out,
            "Today's word is already done: you {outcome} {}. Come back tomorrow.",
            record.word.to_uppercase().bold()
        )
        .map_err(|e| e.to_string())?;
        write_stats(out, &state.stats).map_err(|e| e.to_string())?;
        return Ok(state);
    }

    loop {
        let secret = match options.daily {
            Some(day) => word_of_day(dictionary, day),
            None => random_word(dictionary, &state.played, rng),
        }
        .ok_or("Word list is empty")?;

        let mut game = GameSession::new(secret.clone(), dictionary, options.config);

        if !play_round(&mut game, input, out)? {
            writeln!(out, "\nThanks for playing!").map_err(|e| e.to_string())?;
            return Ok(state);
        }

        game.finish_into(&mut state).map_err(|e| e.to_string())?;
        if let Some(day) = options.daily {
            state.record_daily(day, secret.text(), game.status() == GameStatus::Won);
        }
        store.save(&state).map_err(|e| e.to_string())?;
        write_stats(out, &state.stats).map_err(|e| e.to_string())?;

        if options.daily.is_some() {
            return Ok(state);
        }

        match read_line(input, out, "Play again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => writeln!(out).map_err(|e| e.to_string())?,
            _ => {
                writeln!(out, "\nThanks for playing!").map_err(|e| e.to_string())?;
                return Ok(state);
            }
        }
    }
}

/// Read guesses until the round ends; `false` if the player quit first
fn play_round<R: BufRead, W: Write>(
    game: &mut GameSession<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<bool, String> {
    while game.status() == GameStatus::InProgress {
        let prompt = format!("Guess ({} left)", game.guesses_left());
        let Some(line) = read_line(input, out, &prompt)? else {
            return Ok(false);
        };

        match line.as_str() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(false),
            text => match game.submit(text) {
                Ok(guess) => {
                    writeln!(out, "  {}", guess_tiles(guess)).map_err(|e| e.to_string())?;
                }
                Err(e) => writeln!(out, "{}", e.to_string().red()).map_err(|e| e.to_string())?,
            },
        }
    }

    let secret = game
        .revealed_secret()
        .map(|w| w.text().to_uppercase())
        .unwrap_or_default();

    if game.status() == GameStatus::Won {
        let turns = game.history().len();
        writeln!(
            out,
            "\n{} {} in {} {}",
            "Solved!".bright_green().bold(),
            secret.bright_white().bold(),
            turns,
            if turns == 1 { "guess" } else { "guesses" }
        )
        .map_err(|e| e.to_string())?;
    } else {
        writeln!(out, "\n{} The word was {}", "Out of guesses.".red().bold(), secret.bold())
            .map_err(|e| e.to_string())?;
    }

    for guess in game.history() {
        writeln!(out, "  {}", guess.pattern().to_emoji()).map_err(|e| e.to_string())?;
    }

    Ok(true)
}

fn write_stats<W: Write>(out: &mut W, stats: &GameStats) -> std::io::Result<()> {
    writeln!(out, "\n{}", "Statistics".bright_cyan().bold())?;
    writeln!(
        out,
        "  Played {}  Win % {}  Streak {}  Max streak {}  Avg {:.1}",
        stats.games_played,
        stats.win_percentage(),
        stats.current_streak,
        stats.max_streak,
        stats.average_guesses()
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let width = (count as usize * 20).div_ceil(most as usize);
        writeln!(out, "  {}: {} {count}", i + 1, "█".repeat(width).green())?;
    }
    writeln!(out)
}

/// Prompt and read one trimmed, lower-cased line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, String> {
    write!(out, "{prompt}: ").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| line.trim().to_lowercase()))
}
