//! Game state: everything the table knows, as plain data.
//!
//! `GameState` is what a transport layer relays between participants. It
//! holds no behavior and round-trips through serde (camelCase JSON) and
//! through the compact binary codec (`to_bytes` / `from_bytes`).
//!
//! Collections are `im` persistent vectors. Cloning a state is O(1) and a
//! transition that edits the clone copies only the touched chunks, so the
//! prior state a caller still holds is never observed to change.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::config::GameOptions;
use super::player::{Player, PlayerId};
use crate::error::Result;

/// Hint tokens at the start of a game, and the discard cap.
pub const MAX_HINTS: u8 = 8;

/// Strike tokens at the start of a game.
pub const MAX_STRIKES: u8 = 3;

/// Where the game is in its lifecycle.
///
/// The engine never moves this field during `commit_action`; see
/// `rules::lifecycle` for the caller-driven transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Lobby,
    Ongoing,
    Over,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Lobby => "lobby",
            GameStatus::Ongoing => "ongoing",
            GameStatus::Over => "over",
        };
        f.write_str(name)
    }
}

/// Shared token pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tokens {
    /// Spent to give hints; regained by discarding and by completing a color.
    pub hints: u8,
    /// Lost on every misplay. The game is lost at zero.
    pub strikes: u8,
}

impl Default for Tokens {
    fn default() -> Self {
        Self {
            hints: MAX_HINTS,
            strikes: MAX_STRIKES,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Caller-managed lifecycle status.
    pub status: GameStatus,

    /// Options the game was created with (seed always resolved).
    pub options: GameOptions,

    /// Seated players, in seat order.
    pub players: Vector<Player>,

    /// Seat whose turn it is.
    pub current_player: PlayerId,

    /// Turns remaining once the draw pile runs out. Starts at
    /// `players_count + 1` and may go negative if play continues.
    pub actions_left: i32,

    pub tokens: Tokens,

    /// Successfully played cards, in play order.
    pub played_cards: Vector<Card>,

    /// Undealt cards. Starting hands come off the front, draws off the back.
    pub draw_pile: Vector<Card>,

    pub discard_pile: Vector<Card>,
}

impl GameState {
    /// Number of seats at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.options.players_count
    }

    /// Number of players who have joined so far.
    #[must_use]
    pub fn seated_count(&self) -> usize {
        self.players.len()
    }

    /// Is every seat taken?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.seated_count() >= self.player_count()
    }

    /// Get a seated player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// The player whose turn it is, if seated.
    #[must_use]
    pub fn current(&self) -> Option<&Player> {
        self.player(self.current_player)
    }

    /// Encode with the binary codec.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
