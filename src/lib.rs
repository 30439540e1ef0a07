//! Shiritori - a two-player word-chaining game engine
//!
//! Players alternate submitting words that:
//! - start with the last letter of the opponent's most recent word
//! - meet a minimum length and have not been played by the submitter before
//! - exist according to a dictionary collaborator
//!
//! Every turn runs against a countdown; letting it expire forfeits the turn.

pub mod client;
pub mod config;
pub mod error;
pub mod game;
pub mod session;

// Re-export commonly used types for convenience
pub use error::{GameResult, ShiritoriError};

// Re-export core game types
pub use game::{
    GameSnapshot, GameState, PendingLookup, Player, PlayerId, PlayerSlots, Rejection, Submission,
    TurnOutcome, TurnResolver,
};

// Re-export dictionary clients
pub use client::{Dictionary, DictionaryError, HttpDictionary, WordListDictionary};

// Re-export configuration interfaces
pub use config::{DictionaryConfig, GameConfig, ShiritoriConfig};

// Re-export session runtime
pub use session::{GameSession, SessionHandle};
