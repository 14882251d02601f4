//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar, guess_tiles, tile};
use crate::commands::{BenchResult, DailyResult, EvaluationResult, FilterResult, HintResult};
use colored::Colorize;

/// Words listed in full before the filter output is cut short
const MAX_LISTED: usize = 100;

/// Print a marked guess
pub fn print_evaluation(result: &EvaluationResult) {
    let tiles: String = result
        .guess
        .bytes()
        .zip(result.pattern.marks())
        .map(|(letter, &mark)| tile(letter, mark).to_string())
        .collect();

    println!("\n  {tiles}");
    println!("  {}\n", result.pattern.to_emoji());
}

/// Print the words left after filtering
pub fn print_filter_result(result: &FilterResult) {
    println!();
    for guess in &result.history {
        println!("  {}", guess_tiles(guess));
    }

    println!(
        "\n{} of {} words remain",
        result.remaining.len().to_string().bright_yellow().bold(),
        result.total
    );

    if result.remaining.is_empty() {
        println!("{}", "No word satisfies every guess.".red());
        return;
    }

    let listed: Vec<String> = result
        .remaining
        .iter()
        .take(MAX_LISTED)
        .map(|w| w.text().to_uppercase())
        .collect();
    for row in listed.chunks(10) {
        println!("  {}", row.join(" "));
    }
    if result.remaining.len() > MAX_LISTED {
        println!("  ... and {} more", result.remaining.len() - MAX_LISTED);
    }
    println!();
}

/// Print ranked hints
pub fn print_hints(result: &HintResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} candidates remaining",
        "HINTS:".bright_cyan().bold(),
        result.remaining
    );
    println!("{}", "═".repeat(60).cyan());

    if result.hints.is_empty() {
        println!("\n{}", "No candidates remain. Check the patterns.".red());
        return;
    }

    for (i, hint) in result.hints.iter().enumerate() {
        let marker = if hint.is_candidate { "●" } else { " " };
        println!(
            "\n {:2}. {} {}  [{}] {}",
            i + 1,
            hint.word.to_uppercase().bright_yellow().bold(),
            marker.green(),
            entropy_bar(hint.entropy, result.remaining, 20).green(),
            format!("{:.3} bits", hint.entropy).bright_white()
        );
        println!(
            "     expected {:.1} left, worst case {}",
            hint.expected_remaining, hint.max_partition
        );
    }
    println!("\n {} could be the answer\n", "●".green());
}

/// Print today's puzzle number, and the word if asked for
pub fn print_daily(result: &DailyResult, reveal: bool) {
    println!(
        "\nPuzzle #{} (day {})",
        (result.index + 1).to_string().bright_yellow().bold(),
        result.day
    );
    if reveal {
        println!("Word: {}\n", result.word.to_uppercase().bright_green().bold());
    } else {
        println!("Run with --reveal to show the word\n");
    }
}

/// Print the result of a bench run
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guesses, &count) in &result.distribution {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failed.is_empty() {
        println!("\n{} {}", "Failed:".red().bold(), result.failed.join(", "));
    }
    println!();
}
