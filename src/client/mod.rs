//! Dictionary clients used to confirm that a word exists

pub mod http;
pub mod word_list;

use std::sync::Arc;
use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;
use crate::config::DictionaryConfig;
use crate::error::GameResult;

// Re-export client types
pub use http::HttpDictionary;
pub use word_list::WordListDictionary;

/// Failure talking to a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dictionary answered with unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Failed to parse dictionary response: {message}")]
    Parse { message: String },

    #[error("Invalid dictionary URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to load word list {path}: {message}")]
    WordList { path: String, message: String },
}

/// Source of truth for whether a word exists
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Look a word up, keeping transport failures distinct from "not found"
    async fn lookup(&self, word: &str) -> Result<bool, DictionaryError>;

    /// Fail-closed existence check: any lookup failure counts as "not found"
    async fn exists(&self, word: &str) -> bool {
        match self.lookup(word).await {
            Ok(found) => found,
            Err(err) => {
                warn!(word = %word, error = %err, "Dictionary lookup failed, treating word as invalid");
                false
            }
        }
    }
}

/// Build the dictionary selected by configuration: the word list when one is
/// configured, the HTTP dictionary otherwise
pub fn from_config(config: &DictionaryConfig) -> GameResult<Arc<dyn Dictionary>> {
    match &config.word_list {
        Some(path) => Ok(Arc::new(WordListDictionary::from_file(path)?)),
        None => Ok(Arc::new(HttpDictionary::new(config)?)),
    }
}
