//! Wordy Bot - CLI
//!
//! Plays five-letter word games against a known word, benchmarks itself, or
//! suggests guesses interactively.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use wordy_bot::{
    commands::{
        BenchmarkConfig, FeedbackMode, SolveConfig, pick_targets, run_benchmark, run_simple,
        solve_word,
    },
    core::{WORD_LENGTH, Word},
    output::{print_benchmark_result, print_solve_result},
    vision::{DisplaySpec, MAX_BLOCK_SIZE, parse_hex_color},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordy_bot",
    about = "Word-guessing bot driven by simple positional heuristics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed the guess picker for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// Let the bot play against a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show the selection tier and pool size for each guess
        #[arg(short, long)]
        details: bool,

        /// Maximum number of guesses
        #[arg(short = 'g', long, default_value = "6")]
        max_guesses: usize,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Benchmark the bot on random words from the list
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Maximum number of guesses per game
        #[arg(short = 'g', long, default_value = "6")]
        max_guesses: usize,

        #[command(flatten)]
        display: DisplayArgs,
    },
}

/// Feedback delivery for simulated games
#[derive(Args)]
struct DisplayArgs {
    /// Deliver feedback as a rendered image that the bot has to decode
    #[arg(long)]
    image: bool,

    /// Block width in pixels
    #[arg(long, default_value = "80")]
    block_width: u32,

    /// Block height in pixels
    #[arg(long, default_value = "80")]
    block_height: u32,

    /// Color of a letter in the right place
    #[arg(long, default_value = "#00274C")]
    correct_color: String,

    /// Color of a letter in the wrong place
    #[arg(long, default_value = "#FFCB05")]
    misplaced_color: String,

    /// Color of a letter not in the word
    #[arg(long, default_value = "#D3D3D3")]
    absent_color: String,
}

impl DisplayArgs {
    fn feedback_mode(&self) -> Result<FeedbackMode> {
        if !self.image {
            return Ok(FeedbackMode::Direct);
        }
        for color in [&self.correct_color, &self.misplaced_color, &self.absent_color] {
            parse_hex_color(color).with_context(|| format!("invalid color code '{color}', expected #RRGGBB"))?;
        }
        anyhow::ensure!(
            (1..=MAX_BLOCK_SIZE).contains(&self.block_width) && (1..=MAX_BLOCK_SIZE).contains(&self.block_height),
            "block size must be between 1 and {MAX_BLOCK_SIZE} pixels"
        );

        let spec = DisplaySpec::default()
            .with_block_size(self.block_width, self.block_height)
            .with_colors(&self.correct_color, &self.misplaced_color, &self.absent_color);
        anyhow::ensure!(
            spec.samples_inside_blocks(WORD_LENGTH as u32),
            "blocks {}px wide are too narrow for {}px spacing; use at least {}px",
            self.block_width,
            spec.space_between_letters,
            2 * (WORD_LENGTH as u32 - 1) * spec.space_between_letters
        );
        Ok(FeedbackMode::Image(spec))
    }
}

/// Load the word pool based on the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}"))?,
    };
    anyhow::ensure!(!words.is_empty(), "word list '{wordlist}' is empty");
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_wordlist(&cli.wordlist)?;
    log::debug!("word pool holds {} entries", words.len());

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(&words, cli.seed).context("interactive session failed"),
        Commands::Solve {
            word,
            details,
            max_guesses,
            display,
        } => {
            let target = Word::new(&word);
            if !words.contains(&target) {
                log::warn!("{target} is not in the word list; the bot cannot win this game");
            }

            let config = SolveConfig {
                target: word,
                max_guesses,
                mode: display.feedback_mode()?,
                seed: cli.seed,
            };
            let result = solve_word(&config, &words)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Benchmark {
            count,
            max_guesses,
            display,
        } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("Running benchmark on {count} random words (seed {seed})...");

            let targets = pick_targets(&words, count, seed);
            let config = BenchmarkConfig {
                max_guesses,
                mode: display.feedback_mode()?,
                seed,
                show_progress: true,
            };
            let result = run_benchmark(&words, &targets, &config);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(width: u32, height: u32) -> DisplayArgs {
        DisplayArgs {
            image: true,
            block_width: width,
            block_height: height,
            correct_color: "#00274C".to_string(),
            misplaced_color: "#FFCB05".to_string(),
            absent_color: "#D3D3D3".to_string(),
        }
    }

    #[test]
    fn default_display_is_accepted() {
        assert!(matches!(display(80, 80).feedback_mode(), Ok(FeedbackMode::Image(_))));
    }

    #[test]
    fn direct_mode_skips_display_checks() {
        let mut args = display(0, 0);
        args.image = false;
        assert!(matches!(args.feedback_mode(), Ok(FeedbackMode::Direct)));
    }

    #[test]
    fn blocks_too_narrow_for_spacing_are_rejected() {
        let err = display(20, 20).feedback_mode().unwrap_err();
        assert!(err.to_string().contains("at least 40px"));
        assert!(display(40, 20).feedback_mode().is_ok());
    }

    #[test]
    fn oversized_or_empty_blocks_are_rejected() {
        assert!(display(0, 80).feedback_mode().is_err());
        assert!(display(80, 0).feedback_mode().is_err());
        assert!(display(MAX_BLOCK_SIZE + 1, 80).feedback_mode().is_err());
    }

    #[test]
    fn malformed_colors_are_rejected() {
        let mut args = display(80, 80);
        args.absent_color = "#+F+F+F".to_string();
        assert!(args.feedback_mode().is_err());
    }
}
