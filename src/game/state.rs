//! Game state store and the snapshot handed to presentation layers

use serde::{Deserialize, Serialize};
use crate::game::player::{Player, PlayerId, PlayerSlots};
use crate::game::validation::Rejection;

/// Mutable state of one game.
///
/// Fields are only written by [`TurnResolver`](crate::game::TurnResolver);
/// everything else reads through the accessors or a [`GameSnapshot`].
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) players: PlayerSlots<Player>,
    pub(super) active_turn: PlayerId,
    pub(super) pending_word: String,
    pub(super) remaining_seconds: u32,
    pub(super) last_error: Option<Rejection>,
    pub(super) turn_number: u64,
    pub(super) turn_seconds: u32,
}

impl GameState {
    /// Fresh game: empty histories, zero scores, Player 1 to move
    pub fn new(turn_seconds: u32) -> Self {
        Self {
            players: PlayerSlots::default(),
            active_turn: PlayerId::One,
            pending_word: String::new(),
            remaining_seconds: turn_seconds,
            last_error: None,
            turn_number: 0,
            turn_seconds,
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn players(&self) -> &PlayerSlots<Player> {
        &self.players
    }

    pub fn score(&self, id: PlayerId) -> i64 {
        self.players[id].score
    }

    pub fn word_history(&self, id: PlayerId) -> &[String] {
        &self.players[id].word_history
    }

    pub fn active_turn(&self) -> PlayerId {
        self.active_turn
    }

    pub fn pending_word(&self) -> &str {
        &self.pending_word
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Countdown value every turn starts from
    pub fn turn_seconds(&self) -> u32 {
        self.turn_seconds
    }

    pub fn last_error(&self) -> Option<&Rejection> {
        self.last_error.as_ref()
    }

    /// Message of the last rejection, or an empty string
    pub fn last_error_message(&self) -> String {
        self.last_error.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Number of turns resolved so far
    pub fn turn_number(&self) -> u64 {
        self.turn_number
    }

    /// Letter the active player has to start with, if the opponent has played
    pub fn required_initial(&self) -> Option<char> {
        self.players[self.active_turn.other()]
            .last_word()
            .and_then(|word| word.chars().last())
    }

    /// Hand control to the other player with a full countdown
    pub(super) fn advance_turn(&mut self) {
        self.active_turn = self.active_turn.other();
        self.remaining_seconds = self.turn_seconds;
        self.pending_word.clear();
        self.last_error = None;
        self.turn_number += 1;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            active_turn: self.active_turn,
            pending_word: self.pending_word.clone(),
            remaining_seconds: self.remaining_seconds,
            last_error: self.last_error_message(),
            required_initial: self.required_initial(),
            turn_number: self.turn_number,
        }
    }
}

/// Read-only view of a game for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: PlayerSlots<Player>,
    pub active_turn: PlayerId,
    pub pending_word: String,
    pub remaining_seconds: u32,
    /// Empty when the current turn has no rejection
    pub last_error: String,
    pub required_initial: Option<char>,
    pub turn_number: u64,
}

impl GameSnapshot {
    pub fn score(&self, id: PlayerId) -> i64 {
        self.players[id].score
    }

    pub fn word_history(&self, id: PlayerId) -> &[String] {
        &self.players[id].word_history
    }
}
