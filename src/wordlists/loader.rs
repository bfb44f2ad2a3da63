//! Word list loading utilities
//!
//! One word per line. Lines are trimmed and uppercased; blank lines are
//! skipped. Nothing else is validated, so odd entries reach the pool as-is.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordy_bot::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = load_from_str(&content);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited text into words
///
/// # Examples
/// ```
/// use wordy_bot::wordlists::loader::load_from_str;
///
/// let words = load_from_str("crane\n  slate \n\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "SLATE");
/// ```
#[must_use]
pub fn load_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Word::new)
        .collect()
}

/// Convert embedded string slice to Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().map(|&s| Word::new(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_str_normalizes_lines() {
        let words = load_from_str("crane\r\n Slate\n\n   \nIRATE");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn load_from_str_keeps_malformed_entries() {
        let words = load_from_str("toolong\nab1\ncrane");
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "TOOLONG");
        assert_eq!(words[1].text(), "AB1");
    }

    #[test]
    fn words_from_slice_converts_all() {
        let words = words_from_slice(&["crane", "slate"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
    }

    #[test]
    fn load_from_embedded_list() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn load_from_file_reads_temp_file() {
        let path = std::env::temp_dir().join(format!("wordy_bot_loader_{}.txt", std::process::id()));
        fs::write(&path, "apple\nberry\ncrane\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "CRANE");
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
