//! Word validation rules

use thiserror::Error;
use crate::client::Dictionary;
use crate::config::GameConfig;
use crate::game::player::PlayerId;
use crate::game::state::GameState;

/// Reason a submitted word was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Word must contain at least {min_length} characters")]
    TooShort { min_length: usize },

    #[error("Word must start with '{expected}', the last character of your opponent's word")]
    ChainMismatch { expected: char },

    #[error("You already used this word. Please enter a new word")]
    AlreadyUsed,

    #[error("Word is not in the dictionary")]
    InvalidWord,
}

impl Rejection {
    /// Whether the pending input is cleared after this rejection
    pub fn clears_input(&self) -> bool {
        !matches!(self, Rejection::TooShort { .. })
    }

    /// Points deducted from the submitter
    pub fn penalty(&self, config: &GameConfig) -> i64 {
        match self {
            Rejection::ChainMismatch { .. } => config.chain_penalty,
            _ => 0,
        }
    }
}

/// Case-insensitive comparison of two characters
fn same_letter(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

/// Length check
pub fn check_length(word: &str, min_length: usize) -> Result<(), Rejection> {
    if word.chars().count() < min_length {
        return Err(Rejection::TooShort { min_length });
    }
    Ok(())
}

/// Shiritori rule against the opponent's most recent word
pub fn check_chain(word: &str, opponent_last_word: Option<&str>) -> Result<(), Rejection> {
    let Some(expected) = opponent_last_word.and_then(|last| last.chars().last()) else {
        return Ok(());
    };

    match word.chars().next() {
        Some(first) if same_letter(first, expected) => Ok(()),
        _ => Err(Rejection::ChainMismatch { expected }),
    }
}

/// Runs every check that needs no dictionary, in rule order
pub fn check_local(
    word: &str,
    player: PlayerId,
    state: &GameState,
    config: &GameConfig,
) -> Result<(), Rejection> {
    check_length(word, config.min_word_length)?;
    check_chain(word, state.player(player.other()).last_word())?;

    if state.player(player).has_played(word) {
        return Err(Rejection::AlreadyUsed);
    }

    Ok(())
}

/// Full validation: local rules followed by the dictionary lookup
pub async fn validate_word(
    word: &str,
    player: PlayerId,
    state: &GameState,
    config: &GameConfig,
    dictionary: &dyn Dictionary,
) -> Result<(), Rejection> {
    check_local(word, player, state, config)?;

    if !dictionary.exists(word).await {
        return Err(Rejection::InvalidWord);
    }

    Ok(())
}
