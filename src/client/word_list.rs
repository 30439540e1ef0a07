//! In-memory dictionary for offline play

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use async_trait::async_trait;
use super::{Dictionary, DictionaryError};

/// Case-insensitive set of known words
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().trim().to_lowercase()).collect(),
        }
    }

    /// One word per line; blank lines and `#` comments are skipped
    pub fn parse(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DictionaryError::WordList {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::parse(&content))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

#[async_trait]
impl Dictionary for WordListDictionary {
    async fn lookup(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.contains(word))
    }
}
