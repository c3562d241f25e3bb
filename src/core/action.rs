//! Action representation: the three moves a player can make on their turn.
//!
//! Actions are a closed sum type, so the engine dispatches exhaustively and
//! every variant carries exactly the fields it needs:
//! - `Discard`: a hand position
//! - `Play`: a hand position plus the card the caller says is there
//! - `Hint`: a target seat plus one color or one number
//!
//! On the wire actions are tagged by an `"action"` field. A hint's `type` and
//! `value` sit directly on the action record:
//!
//! ```
//! use rust_hanabi::core::{Action, Color, Hint, PlayerId};
//!
//! let json = r#"{"action":"hint","from":0,"to":1,"type":"color","value":"red"}"#;
//! let action: Action = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(
//!     action,
//!     Action::Hint { from: PlayerId::new(0), to: PlayerId::new(1), hint: Hint::Color(Color::Red) },
//! );
//! ```

use serde::{Deserialize, Serialize};

use super::card::{Card, Color};
use super::player::PlayerId;

/// A hint: one attribute, one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Hint {
    Color(Color),
    Number(u8),
}

impl Hint {
    /// Does `card` carry the hinted value?
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match *self {
            Hint::Color(color) => card.color == color,
            Hint::Number(number) => card.number == number,
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::Color(color) => write!(f, "color {color}"),
            Hint::Number(number) => write!(f, "number {number}"),
        }
    }
}

/// A complete player action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// Discard the card at `card_index` to regain a hint token.
    Discard {
        from: PlayerId,
        #[serde(rename = "cardIndex")]
        card_index: usize,
    },

    /// Play the card at `card_index` onto the table.
    ///
    /// `card` is the card the caller reveals; it goes to the discard pile on
    /// a misplay.
    Play {
        from: PlayerId,
        #[serde(rename = "cardIndex")]
        card_index: usize,
        card: Card,
    },

    /// Tell `to` which of their cards match `hint`.
    Hint {
        from: PlayerId,
        to: PlayerId,
        #[serde(flatten)]
        hint: Hint,
    },
}

impl Action {
    /// The acting player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            Action::Discard { from, .. } | Action::Play { from, .. } | Action::Hint { from, .. } => from,
        }
    }

    /// Short name of the variant, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Discard { .. } => "discard",
            Action::Play { .. } => "play",
            Action::Hint { .. } => "hint",
        }
    }
}
