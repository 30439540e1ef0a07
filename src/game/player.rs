//! Player identities and per-player records

use std::fmt;
use std::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

/// Identity of one of the two seats at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both identities in seating order
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The opposing player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Seat number as shown to players (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Fixed two-entry map indexed by [`PlayerId`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSlots<T> {
    pub one: T,
    pub two: T,
}

impl<T> PlayerSlots<T> {
    pub fn new(one: T, two: T) -> Self {
        Self { one, two }
    }

    /// Iterate entries in seating order
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [(PlayerId::One, &self.one), (PlayerId::Two, &self.two)].into_iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerSlots<U> {
        PlayerSlots {
            one: f(&self.one),
            two: f(&self.two),
        }
    }
}

impl<T> Index<PlayerId> for PlayerSlots<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }
}

impl<T> IndexMut<PlayerId> for PlayerSlots<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        }
    }
}

/// Words played and points earned by one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Accepted words in play order
    pub word_history: Vec<String>,
    pub score: i64,
}

impl Player {
    /// Most recently accepted word
    pub fn last_word(&self) -> Option<&str> {
        self.word_history.last().map(String::as_str)
    }

    /// Case-sensitive membership check against this player's own history
    pub fn has_played(&self, word: &str) -> bool {
        self.word_history.iter().any(|played| played == word)
    }
}
