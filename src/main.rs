//! Wordle Filter - CLI
//!
//! Evaluate guesses, filter word lists by annotated guesses, get entropy hints
//! and play rounds in the terminal.

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, debug};
use rand::seq::IndexedRandom;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;
use wordle_filter::{
    WORD_LENGTH,
    commands::{
        PlayOptions, daily_word, evaluate_words, run_bench, run_filter, run_play, suggest,
    },
    core::Word,
    game::{DEFAULT_MAX_GUESSES, GameConfig, MemoryStore, day_number},
    hint::Hinter,
    output::{print_bench_result, print_daily, print_evaluation, print_filter_result, print_hints},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Wordle guess evaluation, candidate filtering and entropy hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark a guess against a secret
    Evaluate {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// List the words consistent with annotated guesses
    Filter {
        /// Guesses as word:pattern, e.g. sleek:G-GG-
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Suggest the next guesses by expected information
    Hint {
        /// Guesses so far as word:pattern
        guesses: Vec<String>,

        /// Number of suggestions
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Play in the terminal
    Play {
        /// Play the word of the day
        #[arg(long)]
        daily: bool,

        /// Every guess must use the hints revealed so far
        #[arg(long)]
        hard: bool,
    },

    /// Show today's puzzle
    Daily {
        /// Print the word itself
        #[arg(long)]
        reveal: bool,
    },

    /// Play the hint engine against words from the list
    Bench {
        /// Number of random words to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the word list from the -w flag, or the embedded one
fn load_words(path: Option<&PathBuf>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path, Some(WORD_LENGTH))
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };

    if words.is_empty() {
        return Err(anyhow!("word list has no {WORD_LENGTH}-letter words"));
    }
    debug!("using {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Evaluate { secret, guess } => {
            let result = evaluate_words(&secret, &guess).map_err(|e| anyhow!(e))?;
            print_evaluation(&result);
        }
        Commands::Filter { guesses } => {
            let words = load_words(cli.wordlist.as_ref())?;
            let result = run_filter(&words, &guesses)
                .map_err(|e| anyhow!(e))
                .context("filter failed")?;
            print_filter_result(&result);
        }
        Commands::Hint { guesses, count } => {
            let words = load_words(cli.wordlist.as_ref())?;
            let result = suggest(&words, &words, &guesses, count)
                .map_err(|e| anyhow!(e))
                .context("hint failed")?;
            print_hints(&result);
        }
        Commands::Play { daily, hard } => {
            let words = load_words(cli.wordlist.as_ref())?;
            let options = PlayOptions {
                config: GameConfig {
                    hard_mode: hard,
                    ..GameConfig::default()
                },
                daily: daily.then(|| day_number(SystemTime::now())),
            };
            let mut store = MemoryStore::new();
            run_play(
                &words,
                options,
                &mut store,
                &mut io::stdin().lock(),
                &mut io::stdout(),
                &mut rand::rng(),
            )
            .map_err(|e| anyhow!(e))?;
        }
        Commands::Daily { reveal } => {
            let words = load_words(cli.wordlist.as_ref())?;
            let result = daily_word(&words, SystemTime::now()).map_err(|e| anyhow!(e))?;
            print_daily(&result, reveal);
        }
        Commands::Bench { count } => {
            let words = load_words(cli.wordlist.as_ref())?;
            let secrets: Vec<Word> = match count {
                Some(n) => words.choose_multiple(&mut rand::rng(), n).cloned().collect(),
                None => words.clone(),
            };
            println!("Testing {} words...\n", secrets.len());

            let hinter = Hinter::new(&words, &words);
            let result =
                run_bench(&hinter, &secrets, DEFAULT_MAX_GUESSES, false).map_err(|e| anyhow!(e))?;
            print_bench_result(&result);
        }
    }

    Ok(())
}
