//! Engine configuration
//!
//! Everything the engine reads but never changes is collected here and handed
//! to it at construction.

use crate::wordlists::{Dictionary, DictionaryError};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Read-only configuration shared by every session operation
#[derive(Debug, Clone)]
pub struct EngineConfig {
    dictionary: Arc<Dictionary>,
}

impl EngineConfig {
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
        }
    }

    /// Configuration backed by the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Dictionary::embedded())
    }

    /// Resolve a word list source: `embedded` or a path to a word list file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains no valid words.
    pub fn from_source(source: &str) -> Result<Self, DictionaryError> {
        let dictionary = if source.eq_ignore_ascii_case("embedded") {
            Dictionary::embedded()
        } else {
            Dictionary::from_file(Path::new(source))?
        };
        info!(source, words = dictionary.len(), "dictionary loaded");
        Ok(Self::new(dictionary))
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_source() {
        let config = EngineConfig::from_source("embedded").unwrap();
        assert_eq!(config.dictionary().len(), Dictionary::embedded().len());
    }

    #[test]
    fn missing_file_source() {
        assert!(matches!(
            EngineConfig::from_source("/no/such/wordlist.txt"),
            Err(DictionaryError::Io(_))
        ));
    }

    #[test]
    fn clones_share_dictionary() {
        let config = EngineConfig::embedded();
        let copy = config.clone();
        assert!(std::ptr::eq(config.dictionary(), copy.dictionary()));
    }
}
