//! Configuration management for the Shiritori engine

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::error::ShiritoriError;

/// Default dictionary endpoint (entries are looked up as `{base_url}/{word}`)
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Main configuration for a Shiritori deployment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiritoriConfig {
    /// Game rule configuration
    #[serde(default)]
    pub game: GameConfig,
    /// Dictionary collaborator configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

/// Game rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown length of every turn (seconds)
    pub turn_seconds: u32,
    /// Minimum number of characters a word must have
    pub min_word_length: usize,
    /// Points awarded for an accepted word
    pub accept_reward: i64,
    /// Points deducted for breaking the chain
    pub chain_penalty: i64,
    /// Points deducted when the countdown expires
    pub forfeit_penalty: i64,
    /// Interval between timer ticks (milliseconds)
    pub tick_millis: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_seconds: 12,
            min_word_length: 4,
            accept_reward: 1,
            chain_penalty: 1,
            forfeit_penalty: 1,
            tick_millis: 1000,
        }
    }
}

impl GameConfig {
    /// Interval between two countdown ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

/// Dictionary collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base URL of the dictionary entries endpoint
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Offline word list; when set it replaces the HTTP dictionary
    pub word_list: Option<PathBuf>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DICTIONARY_URL.to_string(),
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
            word_list: None,
        }
    }
}

impl ShiritoriConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ShiritoriError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ShiritoriError::Configuration {
                message: format!("Failed to read config file: {}", e),
                field: "config_file".to_string(),
            }
        })?;

        let config: ShiritoriConfig = toml::from_str(&content).map_err(|e| {
            ShiritoriError::Configuration {
                message: format!("Failed to parse config file: {}", e),
                field: "config_format".to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ShiritoriError> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            ShiritoriError::Configuration {
                message: format!("Failed to serialize config: {}", e),
                field: "config_serialization".to_string(),
            }
        })?;

        fs::write(path, content).map_err(|e| {
            ShiritoriError::Configuration {
                message: format!("Failed to write config file: {}", e),
                field: "config_write".to_string(),
            }
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ShiritoriError> {
        if self.game.turn_seconds == 0 {
            return Err(ShiritoriError::Configuration {
                message: "Turn length must be greater than 0".to_string(),
                field: "game.turn_seconds".to_string(),
            });
        }

        if self.game.min_word_length == 0 {
            return Err(ShiritoriError::Configuration {
                message: "Minimum word length must be greater than 0".to_string(),
                field: "game.min_word_length".to_string(),
            });
        }

        if self.game.tick_millis == 0 {
            return Err(ShiritoriError::Configuration {
                message: "Tick interval must be greater than 0".to_string(),
                field: "game.tick_millis".to_string(),
            });
        }

        if self.game.accept_reward < 0 || self.game.chain_penalty < 0 || self.game.forfeit_penalty < 0 {
            return Err(ShiritoriError::Configuration {
                message: "Rewards and penalties are magnitudes and must not be negative".to_string(),
                field: "game.scoring".to_string(),
            });
        }

        if self.dictionary.word_list.is_none() && self.dictionary.base_url.trim().is_empty() {
            return Err(ShiritoriError::Configuration {
                message: "Dictionary base URL must not be empty".to_string(),
                field: "dictionary.base_url".to_string(),
            });
        }

        if self.dictionary.request_timeout_secs == 0 || self.dictionary.connect_timeout_secs == 0 {
            return Err(ShiritoriError::Configuration {
                message: "Dictionary timeouts must be greater than 0".to_string(),
                field: "dictionary.timeouts".to_string(),
            });
        }

        Ok(())
    }

    /// Configuration matching the classic rules against the public dictionary
    pub fn production() -> Self {
        Self {
            game: GameConfig::default(),
            dictionary: DictionaryConfig {
                request_timeout_secs: 3,    // Must fit well inside a turn
                connect_timeout_secs: 1,
                ..DictionaryConfig::default()
            },
        }
    }

    /// Create a development configuration with relaxed settings
    pub fn development() -> Self {
        Self {
            game: GameConfig {
                turn_seconds: 30,           // Longer turns while testing by hand
                min_word_length: 3,
                ..GameConfig::default()
            },
            dictionary: DictionaryConfig {
                request_timeout_secs: 10,
                connect_timeout_secs: 5,
                ..DictionaryConfig::default()
            },
        }
    }
}
