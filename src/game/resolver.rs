//! Turn resolution: the only code path that mutates a [`GameState`]

use tracing::{debug, info};
use crate::client::Dictionary;
use crate::config::GameConfig;
use crate::game::player::PlayerId;
use crate::game::state::GameState;
use crate::game::validation::{self, Rejection};

/// Dictionary check issued for a submission that passed the local rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub player: PlayerId,
    pub word: String,
    /// Turn the submission belongs to
    pub turn_number: u64,
}

/// Result of resolving a trigger against the game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Accepted { player: PlayerId, word: String },
    Rejected { player: PlayerId, rejection: Rejection },
    Forfeited { player: PlayerId },
    /// Lookup result for a turn that already ended; state untouched
    Stale { turn_number: u64 },
}

impl TurnOutcome {
    /// Whether this outcome handed the turn to the other player
    pub fn advances_turn(&self) -> bool {
        matches!(self, TurnOutcome::Accepted { .. } | TurnOutcome::Forfeited { .. })
    }
}

/// What happened to a submit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Rejected by a local rule
    Resolved(TurnOutcome),
    /// Local rules passed; the dictionary has the last word
    AwaitingLookup(PendingLookup),
    /// A lookup for this turn is still in flight; nothing changed
    Busy,
}

/// Owns a game's state and applies submissions, lookups and timer ticks to it
#[derive(Debug, Clone)]
pub struct TurnResolver {
    config: GameConfig,
    state: GameState,
    lookup_in_flight: bool,
}

impl TurnResolver {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(config.turn_seconds);
        Self {
            config,
            state,
            lookup_in_flight: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn lookup_in_flight(&self) -> bool {
        self.lookup_in_flight
    }

    /// Replace the active player's in-progress input
    pub fn set_pending_word(&mut self, text: impl Into<String>) {
        self.state.pending_word = text.into();
    }

    /// Submit the pending word for the active player
    pub fn submit(&mut self) -> Submission {
        if self.lookup_in_flight {
            debug!(turn = self.state.turn_number, "Submission ignored while lookup is in flight");
            return Submission::Busy;
        }

        let player = self.state.active_turn;
        let word = self.state.pending_word.clone();

        if let Err(rejection) = validation::check_local(&word, player, &self.state, &self.config) {
            return Submission::Resolved(self.reject(player, rejection, &word));
        }

        self.lookup_in_flight = true;
        Submission::AwaitingLookup(PendingLookup {
            player,
            word,
            turn_number: self.state.turn_number,
        })
    }

    /// Apply the dictionary's answer for an earlier submission
    pub fn complete_lookup(&mut self, lookup: PendingLookup, exists: bool) -> TurnOutcome {
        if lookup.turn_number != self.state.turn_number {
            debug!(
                lookup_turn = lookup.turn_number,
                current_turn = self.state.turn_number,
                word = %lookup.word,
                "Discarding lookup result for a finished turn"
            );
            return TurnOutcome::Stale { turn_number: lookup.turn_number };
        }

        self.lookup_in_flight = false;

        if exists {
            self.accept(lookup.player, lookup.word)
        } else {
            self.reject(lookup.player, Rejection::InvalidWord, &lookup.word)
        }
    }

    /// Submit and resolve in one step, awaiting the dictionary inline.
    /// Returns `None` while a lookup started by [`TurnResolver::submit`] is in flight.
    pub async fn submit_with(&mut self, dictionary: &dyn Dictionary) -> Option<TurnOutcome> {
        if self.lookup_in_flight {
            debug!(turn = self.state.turn_number, "Submission ignored while lookup is in flight");
            return None;
        }

        let player = self.state.active_turn;
        let word = self.state.pending_word.clone();

        let outcome = match validation::validate_word(&word, player, &self.state, &self.config, dictionary).await {
            Ok(()) => self.accept(player, word),
            Err(rejection) => self.reject(player, rejection, &word),
        };
        Some(outcome)
    }

    /// One countdown step; forfeits the turn when it reaches zero
    pub fn tick(&mut self) -> Option<TurnOutcome> {
        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);

        if self.state.remaining_seconds == 0 {
            Some(self.forfeit())
        } else {
            None
        }
    }

    fn accept(&mut self, player: PlayerId, word: String) -> TurnOutcome {
        info!(%player, word = %word, "Word accepted");

        // reward goes to the submitter, before the turn flips
        let entry = &mut self.state.players[player];
        entry.word_history.push(word.clone());
        entry.score += self.config.accept_reward;

        self.end_turn();
        TurnOutcome::Accepted { player, word }
    }

    /// `submitted` is the rejected word; input typed since the submission is kept
    fn reject(&mut self, player: PlayerId, rejection: Rejection, submitted: &str) -> TurnOutcome {
        debug!(%player, reason = %rejection, "Word rejected");

        self.state.players[player].score -= rejection.penalty(&self.config);
        if rejection.clears_input() && self.state.pending_word == submitted {
            self.state.pending_word.clear();
        }
        self.state.last_error = Some(rejection.clone());

        TurnOutcome::Rejected { player, rejection }
    }

    fn forfeit(&mut self) -> TurnOutcome {
        let player = self.state.active_turn;
        info!(%player, "Turn forfeited on timeout");

        self.state.players[player].score -= self.config.forfeit_penalty;
        self.end_turn();

        TurnOutcome::Forfeited { player }
    }

    fn end_turn(&mut self) {
        self.state.advance_turn();
        self.lookup_in_flight = false;
    }
}
