//! Player identification and seats.
//!
//! ## PlayerId
//!
//! Type-safe seat index supporting 2-5 players.
//!
//! ## Player
//!
//! A participant at the table: caller-supplied identity plus the hand the
//! engine deals. The engine never interprets `id` or `name`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::HandCard;

/// Seat index at the table.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around the table.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use rust_hanabi::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant and their hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Caller-assigned identity (account, session, ...).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Seat, assigned when the player joins.
    #[serde(default)]
    pub index: Option<PlayerId>,

    /// Cards held, newest first. The holder cannot see them.
    #[serde(default)]
    pub hand: Vector<HandCard>,
}

impl Player {
    /// Create a player with no seat and an empty hand.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            index: None,
            hand: Vector::new(),
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}
