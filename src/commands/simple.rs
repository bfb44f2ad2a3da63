//! Simple interactive CLI mode
//!
//! The bot proposes a guess, the player types back what the game showed.

use super::solve::new_engine;
use crate::core::{Pattern, Word};
use crate::output::formatters::colored_guess;
use crate::solver::EngineError;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn run_simple(words: &[Word], seed: Option<u64>) -> io::Result<()> {
    let stdin = io::stdin();
    run_session(words, seed, stdin.lock(), io::stdout())
}

/// Run the interactive mode on any input and output
///
/// End of input is treated like `quit`.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_session<B: BufRead, W: Write>(
    words: &[Word],
    seed: Option<u64>,
    mut input: B,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Wordy Bot - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "I'll propose a word. After each guess, enter what the game showed:\n")?;
    writeln!(out, "  - Use G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Use Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - Use -/_/⬜ for gray (not in word)")?;
    writeln!(out, "  - Or type 'win' if the word was right!\n")?;
    writeln!(out, "Commands: 'skip' if the game rejected the word, 'new' for new game, 'quit' to exit\n")?;

    let mut games = 0_u64;
    let mut engine = new_engine(words, seed);
    let mut history: Vec<(Word, Pattern)> = Vec::new();

    'game: loop {
        let guess = match engine.select_guess() {
            Ok(guess) => guess,
            Err(EngineError::EmptyCandidates) => {
                writeln!(out, "\n❌ I have no words left to try. Your feedback may be incorrect.")?;
                match prompt(&mut input, &mut out, "Type 'new' to start over or 'quit' to exit")?.as_deref() {
                    Some("new" | "n") => {
                        games += 1;
                        engine = new_engine(words, seed.map(|s| s.wrapping_add(games)));
                        history.clear();
                        writeln!(out, "\n🔄 New game started!\n")?;
                        continue;
                    }
                    _ => break,
                }
            }
            Err(err) => return Err(io::Error::other(err)),
        };

        let turn = history.len() + 1;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "Turn {turn}: {} words still in my list",
            engine.remaining() + 1
        )?;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(out, "\n📝 My guess: {}", guess.text().bright_white().bold())?;
        if let Some(tier) = engine.last_tier() {
            writeln!(out, "   Picked by:  {tier}\n")?;
        }

        let pattern = loop {
            let Some(line) = prompt(&mut input, &mut out, "Enter feedback (G/Y/-, 'win', or command)")? else {
                break 'game;
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => break 'game,
                "new" | "n" => {
                    games += 1;
                    engine = new_engine(words, seed.map(|s| s.wrapping_add(games)));
                    history.clear();
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue 'game;
                }
                "skip" | "s" => {
                    writeln!(out, "↷ Skipping {guess}\n")?;
                    continue 'game;
                }
                "win" | "correct" | "yes" | "solved" => break Pattern::perfect(guess.len()),
                _ => match Pattern::from_str(&line) {
                    Some(pattern) if pattern.len() == guess.len() => break pattern,
                    Some(pattern) => writeln!(
                        out,
                        "❌ Expected {} marks, got {}\n",
                        guess.len(),
                        pattern.len()
                    )?,
                    None => writeln!(out, "❌ Invalid pattern! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n")?,
                },
            }
        };

        engine
            .record_feedback(&guess, pattern.entries())
            .map_err(io::Error::other)?;
        let solved = pattern.is_perfect();
        history.push((guess, pattern));

        if solved {
            writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
            writeln!(out, "{}", "    🎉  S O L V E D !  🎉    ".bright_green().bold())?;
            writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
            writeln!(
                out,
                "\n  Solution found in {} {}",
                history.len().to_string().bright_cyan().bold(),
                if history.len() == 1 { "guess" } else { "guesses" }
            )?;

            writeln!(out, "\n  Guess history:")?;
            for (i, (word, pat)) in history.iter().enumerate() {
                writeln!(
                    out,
                    "    {}. {} {}",
                    (i + 1).to_string().bright_black(),
                    colored_guess(word, pat),
                    pat.to_emoji()
                )?;
            }
            writeln!(out)?;

            match prompt(&mut input, &mut out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    games += 1;
                    engine = new_engine(words, seed.map(|s| s.wrapping_add(games)));
                    history.clear();
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                _ => break,
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Print a prompt and read one trimmed line, `None` at end of input
fn prompt<B: BufRead, W: Write>(input: &mut B, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
