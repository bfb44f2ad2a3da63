//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::Word;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colored_guess(&Word::new(&step.word), &step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            println!("  Picked by:  {}", step.tier);
            println!("  Pool:       {} → {}", step.pool_before, step.pool_after);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let success_rate = if result.total_words == 0 {
        0.0
    } else {
        result.solved as f64 / result.total_words as f64 * 100.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({})",
        result.solved.to_string().green(),
        format!("{success_rate:.1}%").bright_yellow().bold()
    );
    println!("   Failed:           {}", result.failed.to_string().red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
    counts.sort_unstable();
    for (guess_count, count) in counts {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    if result.failed > 0 {
        let pct = (result.failed as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   X: {} {:4} ({pct:5.1}%)", bar.red(), result.failed);
    }
}
