//! Core data model: cards, knowledge, players, actions, options, state, RNG.
//!
//! Nothing in this module makes rule decisions. It defines the shapes the
//! `rules` module transforms and the wire format callers relay.

pub mod action;
pub mod card;
pub mod config;
pub mod knowledge;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, Hint};
pub use card::{copies_of, Card, Color, HandCard, MAX_NUMBER, MIN_NUMBER, NUMBERS};
pub use config::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
pub use knowledge::{CardKnowledge, KnowledgeVector, Weight};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use state::{GameState, GameStatus, Tokens, MAX_HINTS, MAX_STRIKES};
