//! Game options.
//!
//! Callers configure a game once, at creation:
//! - `players_count`: table size, 2-5
//! - `multicolor`: adds the sixth color variant
//! - `seed`: drives every shuffle; filled in by `new_game` when absent
//!
//! Options are plain data and travel inside `GameState`, so every participant
//! can see (and re-derive) how the deck was built.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// Smallest table.
pub const MIN_PLAYERS: usize = 2;

/// Largest table.
pub const MAX_PLAYERS: usize = 5;

/// Options fixed at game creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOptions {
    /// Number of seats (2-5).
    pub players_count: usize,

    /// Is the multicolor variant in play?
    #[serde(default)]
    pub multicolor: bool,

    /// Shuffle seed. `None` asks `new_game` to pick one.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameOptions {
    /// Options for a base game with `players_count` seats and no seed.
    #[must_use]
    pub fn new(players_count: usize) -> Self {
        Self {
            players_count,
            multicolor: false,
            seed: None,
        }
    }

    /// Enable the multicolor variant.
    #[must_use]
    pub fn with_multicolor(mut self) -> Self {
        self.multicolor = true;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the table size.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players_count) {
            return Err(RulesError::InvalidPlayerCount {
                count: self.players_count,
            });
        }
        Ok(())
    }

    /// Starting hand size for this table.
    #[must_use]
    pub fn starting_hand_size(&self) -> usize {
        match self.players_count {
            2 | 3 => 5,
            _ => 4,
        }
    }

    /// Number of cards on a complete played pile.
    #[must_use]
    pub fn full_pile_size(&self) -> usize {
        if self.multicolor {
            30
        } else {
            25
        }
    }
}
