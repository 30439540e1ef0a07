//! Dictionary backed by the dictionaryapi.dev HTTP API

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use crate::config::DictionaryConfig;
use super::{Dictionary, DictionaryError};

/// Looks words up with `GET {base_url}/{word}`.
///
/// A `200` carrying a non-empty JSON array means the word exists and a
/// `404` means it does not. Anything else is reported as an error.
#[derive(Debug, Clone)]
pub struct HttpDictionary {
    client: Client,
    base_url: Url,
}

impl HttpDictionary {
    pub fn new(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| DictionaryError::InvalidUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DictionaryError::InvalidUrl {
                url: config.base_url.clone(),
                message: "URL cannot carry path segments".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Entry URL for a word, with the word percent-encoded as one path segment
    pub fn entry_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

#[async_trait]
impl Dictionary for HttpDictionary {
    async fn lookup(&self, word: &str) -> Result<bool, DictionaryError> {
        let url = self.entry_url(word);
        debug!(%url, "Looking up word");

        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => {
                let entries: Vec<serde_json::Value> = response
                    .json()
                    .await
                    .map_err(|e| DictionaryError::Parse { message: e.to_string() })?;
                Ok(!entries.is_empty())
            }
            status => Err(DictionaryError::UnexpectedStatus { status: status.as_u16() }),
        }
    }
}
