//! Game rules: every decision the engine makes.
//!
//! - `setup`: deck, seeding, joining
//! - `hints`: knowledge propagation
//! - `playability`: the play-legality predicate
//! - `engine`: `commit_action` and the `RulesEngine` trait
//! - `queries`: game over, score, pile tops
//! - `lifecycle`: caller-driven status transitions
//!
//! All functions are pure: they read a state and return a new one (or a
//! value) without touching their input.

pub mod engine;
pub mod hints;
pub mod lifecycle;
pub mod playability;
pub mod queries;
pub mod setup;

pub use engine::{commit_action, RulesEngine, StandardRules};
pub use hints::{apply_hint, is_valid_hint, matching_indices};
pub use lifecycle::{refresh_status, start_game};
pub use playability::is_playable;
pub use queries::{game_over_reason, get_played_cards_pile, get_score, is_game_over, GameOverReason};
pub use setup::{build_deck, empty_hint, empty_player, join_game, new_game};
