//! End-of-game queries: pure reads over a state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Color, GameState};

/// Why a game has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOverReason {
    /// Every strike token has been spent.
    StrikesExhausted,
    /// Every color has been played up to 5.
    AllCardsPlayed,
    /// The draw pile ran out and the last round of turns is used up.
    ActionsExhausted,
}

/// Which end condition holds, if any.
///
/// Conditions are checked in the order strikes, complete pile, actions.
#[must_use]
pub fn game_over_reason(state: &GameState) -> Option<GameOverReason> {
    if state.tokens.strikes == 0 {
        Some(GameOverReason::StrikesExhausted)
    } else if state.played_cards.len() == state.options.full_pile_size() {
        Some(GameOverReason::AllCardsPlayed)
    } else if state.actions_left <= 0 {
        Some(GameOverReason::ActionsExhausted)
    } else {
        None
    }
}

/// Has the game reached an end condition?
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    game_over_reason(state).is_some()
}

/// The team's score: one point per played card.
#[must_use]
pub fn get_score(state: &GameState) -> usize {
    state.played_cards.len()
}

/// Highest played number per color. Colors with nothing played are absent.
#[must_use]
pub fn get_played_cards_pile(state: &GameState) -> FxHashMap<Color, u8> {
    let mut pile = FxHashMap::default();
    for card in state.played_cards.iter() {
        let top = pile.entry(card.color).or_insert(card.number);
        *top = (*top).max(card.number);
    }
    pile
}
