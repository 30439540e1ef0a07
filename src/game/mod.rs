//! Game rules, state and turn resolution

pub mod player;
pub mod state;
pub mod validation;
pub mod resolver;

// Re-export core game types
pub use player::{Player, PlayerId, PlayerSlots};
pub use state::{GameSnapshot, GameState};
pub use validation::{check_local, validate_word, Rejection};
pub use resolver::{PendingLookup, Submission, TurnOutcome, TurnResolver};
