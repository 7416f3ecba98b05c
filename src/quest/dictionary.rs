//! Word list of strings recognised as valid things.
//!
//! Loaded once at startup from a flat file, one word per line. Lookups are
//! case-insensitive; the engine does not interpret the words any further.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, warn};

use super::errors::QuestError;

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read a word list. Blank lines are skipped and duplicates collapse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, QuestError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let dictionary = Self::from_words(contents.lines());
        info!(
            "Loaded {} valid things from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Like [`Dictionary::load`], but a missing or unreadable file yields an
    /// empty word list instead of stopping the game.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                warn!(
                    "Word list {} unavailable ({}); no strings recognised as valid things",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn is_valid_thing(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
