//! Error types for the rules engine.
//!
//! Every error is a broken caller contract: the request is rejected and no
//! state is produced. Normal game outcomes such as a misplay are not errors.

use thiserror::Error;

use crate::core::{GameStatus, Hint, PlayerId};

/// Rejected engine request.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RulesError {
    #[error("player count must be between 2 and 5, got {count}")]
    InvalidPlayerCount { count: usize },

    #[error("it is {expected}'s turn, not {got}'s")]
    OutOfTurn { expected: PlayerId, got: PlayerId },

    #[error("{player} cannot hint themselves")]
    SelfHint { player: PlayerId },

    #[error("no hint tokens left")]
    NoHintTokens,

    #[error("table is full ({capacity} seats)")]
    TableFull { capacity: usize },

    #[error("{seated} of {capacity} seats taken, the table is not full yet")]
    SeatsOpen { seated: usize, capacity: usize },

    #[error("{index} is not seated at this table")]
    UnknownPlayer { index: PlayerId },

    #[error("card index {index} is out of range for a hand of {hand_size}")]
    CardIndexOutOfRange { index: usize, hand_size: usize },

    #[error("hint '{hint}' is not valid in this game")]
    InvalidHint { hint: Hint },

    #[error("game is {actual}, expected {expected}")]
    InvalidStatus { expected: GameStatus, actual: GameStatus },

    #[error("state codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Convenience type alias for Results using the crate's error type.
pub type Result<T> = std::result::Result<T, RulesError>;
