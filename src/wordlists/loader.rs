//! Word list loading utilities
//!
//! Accepts plain one-word-per-line lists as well as CSV exports whose first
//! column holds the word (with or without a `Word` header row).

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// Returns the valid words in file order, skipping blank and invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_session::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse a word list from text
///
/// # Examples
/// ```
/// use wordle_session::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Word,Length\ncrane,5\nslate,5\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "CRANE");
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(|line| line.split(',').next().unwrap_or_default().trim())
        .filter(|field| !field.is_empty())
        .enumerate()
        .filter_map(|(i, field)| {
            if i == 0 && field.eq_ignore_ascii_case("word") {
                return None;
            }
            let word = Word::new(field).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        debug!(skipped, "skipped invalid word list entries");
    }

    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_session::wordlists::loader::words_from_slice;
/// use wordle_session::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
