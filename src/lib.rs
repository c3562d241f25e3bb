//! # rust-hanabi
//!
//! A deterministic rules engine for a cooperative card game of hidden
//! information: players hold cards they cannot see and learn about them only
//! through hints from teammates.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation takes a state and returns a new
//!    one. Inputs are never modified, so a caller can keep the previous state.
//!
//! 2. **Deterministic**: the same seed always deals the same deck and picks
//!    the same starting seat; the same state and action always produce the
//!    same result.
//!
//! 3. **Data-only state**: `GameState` carries no behavior and round-trips
//!    through serde, so a transport layer can relay it verbatim.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, copy-on-write
//!   on the parts a transition touches.
//!
//! - **Caller-owned lifecycle**: the engine exposes `is_game_over`; moving
//!   `status` through lobby → ongoing → over is the caller's job, with helpers
//!   in `rules::lifecycle`.
//!
//! ## Modules
//!
//! - `core`: cards, knowledge vectors, players, actions, options, state, RNG
//! - `rules`: setup, hints, playability, the action engine, end-of-game queries
//! - `error`: the `RulesError` type
//!
//! ## Example
//!
//! ```
//! use rust_hanabi::{commit_action, empty_player, join_game, new_game, Action, GameOptions};
//!
//! let mut state = new_game(GameOptions::new(2).with_seed(42)).unwrap();
//! state = join_game(&state, empty_player("a", "Ada")).unwrap();
//! state = join_game(&state, empty_player("b", "Bob")).unwrap();
//!
//! let me = state.current_player;
//! let next = commit_action(&state, &Action::Discard { from: me, card_index: 0 }).unwrap();
//!
//! assert_eq!(next.discard_pile.len(), 1);
//! assert_ne!(next.current_player, me);
//! ```

pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, Card, CardKnowledge, Color, GameOptions, GameRng, GameState, GameStatus, HandCard, Hint,
    KnowledgeVector, Player, PlayerId, Tokens, Weight,
};

pub use crate::error::{Result, RulesError};

pub use crate::rules::{
    apply_hint, build_deck, commit_action, empty_hint, empty_player, game_over_reason,
    get_played_cards_pile, get_score, is_game_over, is_playable, join_game, matching_indices,
    new_game, refresh_status, start_game, GameOverReason, RulesEngine, StandardRules,
};
