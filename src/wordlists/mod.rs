//! Word Dictionary
//!
//! A fixed, ordered set of canonical 5-letter words. It is both the pool
//! secret answers are drawn from and the whitelist every guess is checked
//! against. Nothing mutates a dictionary after it is built.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

/// Errors building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("word list contains no valid 5-letter words")]
    Empty,
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Closed vocabulary of accepted words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if `words` yields nothing.
    pub fn new<I: IntoIterator<Item = Word>>(words: I) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words.into_iter().filter(|w| index.insert(*w)).collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Build a dictionary from raw strings, skipping anything that is not a 5-letter word
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no entry is a valid word.
    pub fn from_strs(words: &[&str]) -> Result<Self, DictionaryError> {
        Self::new(loader::words_from_slice(words))
    }

    /// Dictionary compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the build script rejects an empty or malformed list.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(WORDS).expect("embedded word list is validated at build time")
    }

    /// Load a dictionary from a word list file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Membership check
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Membership check on raw text, ignoring case
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Never empty: `new` rejects empty lists
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: dictionaries hold at least one word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_canonical() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' is not uppercase"
            );
        }
    }

    #[test]
    fn embedded_dictionary_has_example_words() {
        let dictionary = Dictionary::embedded();
        for word in ["crane", "SOLAR", "Tower"] {
            assert!(dictionary.contains_str(word), "{word} missing");
        }
        assert!(!dictionary.contains_str("zzzzz"));
        assert!(!dictionary.contains_str("cranes"));
    }

    #[test]
    fn new_deduplicates_and_keeps_order() {
        let dictionary = Dictionary::from_strs(&["crane", "SOLAR", "Crane", "tower"]).unwrap();
        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SOLAR", "TOWER"]);
        assert_eq!(dictionary.len(), 3);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn empty_dictionary_rejected() {
        assert!(matches!(
            Dictionary::from_strs(&[]),
            Err(DictionaryError::Empty)
        ));
        assert!(matches!(
            Dictionary::from_strs(&["toolong", "abc"]),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn choose_returns_member() {
        let dictionary = Dictionary::from_strs(&["crane", "solar", "tower"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = dictionary.choose(&mut rng);
            assert!(dictionary.contains(word));
        }
    }

    #[test]
    fn choose_covers_every_word() {
        let dictionary = Dictionary::from_strs(&["crane", "solar", "tower"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: FxHashSet<Word> = (0..300).map(|_| *dictionary.choose(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn choose_is_reproducible_with_seed() {
        let dictionary = Dictionary::embedded();
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(dictionary.choose(&mut a), dictionary.choose(&mut b));
        }
    }
}
