//! The action engine: one transition function for every move.
//!
//! `commit_action` takes a state and an action and returns the next state.
//! The input is never modified: the engine edits an `im`-backed clone and
//! hands it back, so callers can keep the prior state around. On error no
//! state is produced at all.
//!
//! `RulesEngine` wraps the same rules behind a trait for callers that want
//! to hold the rules as a value (UIs listing legal moves, test harnesses).

use tracing::{debug, trace, warn};

use super::hints::{apply_hint, is_valid_hint, matching_indices};
use super::playability::is_playable;
use super::queries::{game_over_reason, get_score, GameOverReason};
use super::setup::empty_hint;
use crate::core::{
    Action, Color, GameState, HandCard, Hint, PlayerId, MAX_HINTS, MAX_NUMBER, NUMBERS,
};
use crate::error::{Result, RulesError};

/// Apply `action` to `state` and return the resulting state.
///
/// After the move itself, the actions countdown drops by one if the draw
/// pile is empty, and the turn passes to the next seat. Game over is not
/// checked here; see `rules::queries` and `rules::lifecycle`.
pub fn commit_action(state: &GameState, action: &Action) -> Result<GameState> {
    let from = action.player();
    if from != state.current_player {
        return Err(RulesError::OutOfTurn {
            expected: state.current_player,
            got: from,
        });
    }

    debug!(player = %from, action = action.kind(), "committing action");

    let mut next = state.clone();

    match *action {
        Action::Discard { card_index, .. } => {
            let removed = take_card(&mut next, from, card_index)?;
            next.discard_pile.push_back(removed.card);
            if next.tokens.hints < MAX_HINTS {
                next.tokens.hints += 1;
            }
            draw_replacement(&mut next, from);
        }

        Action::Play { card_index, card, .. } => {
            let removed = take_card(&mut next, from, card_index)?;
            if removed.card != card {
                warn!(
                    player = %from,
                    card_index,
                    held = %removed.card,
                    supplied = %card,
                    "played card differs from the card in hand"
                );
            }

            if is_playable(&removed.card, &next.played_cards) {
                next.played_cards.push_back(removed.card);
                // Completing a color earns a hint back
                if removed.card.number == MAX_NUMBER {
                    next.tokens.hints += 1;
                }
            } else {
                next.tokens.strikes = next.tokens.strikes.saturating_sub(1);
                next.discard_pile.push_back(card);
                debug!(player = %from, card = %card, strikes = next.tokens.strikes, "misplay");
            }
            draw_replacement(&mut next, from);
        }

        Action::Hint { to, hint, .. } => {
            if next.tokens.hints == 0 {
                return Err(RulesError::NoHintTokens);
            }
            if to == from {
                return Err(RulesError::SelfHint { player: from });
            }
            if !is_valid_hint(hint, &next.options) {
                return Err(RulesError::InvalidHint { hint });
            }

            let target = next
                .players
                .get_mut(to.index())
                .ok_or(RulesError::UnknownPlayer { index: to })?;
            trace!(to = %to, %hint, touched = ?matching_indices(&target.hand, hint), "hint given");
            target.hand = apply_hint(&target.hand, hint);
            next.tokens.hints -= 1;
        }
    }

    if next.draw_pile.is_empty() {
        next.actions_left -= 1;
    }
    next.current_player = state.current_player.next(state.player_count());

    Ok(next)
}

/// Remove the card at `index` from `player`'s hand.
fn take_card(state: &mut GameState, player: PlayerId, index: usize) -> Result<HandCard> {
    let seat = state
        .players
        .get_mut(player.index())
        .ok_or(RulesError::UnknownPlayer { index: player })?;

    if index >= seat.hand.len() {
        return Err(RulesError::CardIndexOutOfRange {
            index,
            hand_size: seat.hand.len(),
        });
    }
    Ok(seat.hand.remove(index))
}

/// Draw from the back of the pile into the front of `player`'s hand.
fn draw_replacement(state: &mut GameState, player: PlayerId) {
    let Some(card) = state.draw_pile.pop_back() else {
        return;
    };
    let knowledge = empty_hint(&state.options);
    if let Some(seat) = state.players.get_mut(player.index()) {
        seat.hand.push_front(HandCard::new(card, knowledge));
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: must be deterministic and leave its input untouched
/// - `is_terminal`: return `None` while the game continues
/// - `legal_actions`: every action `apply_action` would accept right now
pub trait RulesEngine {
    /// Apply an action, producing the next state.
    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState>;

    /// Check if the game is over, and why.
    fn is_terminal(&self, state: &GameState) -> Option<GameOverReason>;

    /// Enumerate the moves open to the current player.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Current score.
    fn score(&self, state: &GameState) -> usize {
        get_score(state)
    }
}

/// The standard rule set.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl RulesEngine for StandardRules {
    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState> {
        commit_action(state, action)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameOverReason> {
        game_over_reason(state)
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let from = state.current_player;
        let Some(player) = state.player(from) else {
            return Vec::new();
        };

        let mut actions = Vec::new();

        for (card_index, held) in player.hand.iter().enumerate() {
            actions.push(Action::Discard { from, card_index });
            actions.push(Action::Play {
                from,
                card_index,
                card: held.card,
            });
        }

        if state.tokens.hints > 0 {
            let hints: Vec<Hint> = Color::enabled(state.options.multicolor)
                .map(Hint::Color)
                .chain(NUMBERS.iter().map(|&n| Hint::Number(n)))
                .collect();

            for to in PlayerId::all(state.seated_count()).filter(|&p| p != from) {
                actions.extend(hints.iter().map(|&hint| Action::Hint { from, to, hint }));
            }
        }

        actions
    }
}
