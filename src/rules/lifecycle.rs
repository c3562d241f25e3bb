//! Caller-driven status transitions.
//!
//! `commit_action` never looks at or moves `status`. Callers that want a
//! lobby → ongoing → over state machine layer these two steps on top:
//! `start_game` once every seat is taken, and `refresh_status` after each
//! committed action.

use tracing::debug;

use super::queries::game_over_reason;
use crate::core::{GameState, GameStatus};
use crate::error::{Result, RulesError};

/// Move a full lobby to `Ongoing`.
pub fn start_game(state: &GameState) -> Result<GameState> {
    if state.status != GameStatus::Lobby {
        return Err(RulesError::InvalidStatus {
            expected: GameStatus::Lobby,
            actual: state.status,
        });
    }
    if !state.is_full() {
        return Err(RulesError::SeatsOpen {
            seated: state.seated_count(),
            capacity: state.player_count(),
        });
    }

    let mut next = state.clone();
    next.status = GameStatus::Ongoing;
    Ok(next)
}

/// Move an ongoing game to `Over` once an end condition holds.
///
/// Any other state comes back unchanged.
#[must_use]
pub fn refresh_status(state: &GameState) -> GameState {
    let mut next = state.clone();
    if state.status == GameStatus::Ongoing {
        if let Some(reason) = game_over_reason(state) {
            debug!(?reason, score = state.played_cards.len(), "game over");
            next.status = GameStatus::Over;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameOptions;
    use crate::rules::{empty_player, join_game, new_game};

    fn full_table() -> GameState {
        let mut state = new_game(GameOptions::new(2).with_seed(8)).unwrap();
        state = join_game(&state, empty_player("a", "Ada")).unwrap();
        join_game(&state, empty_player("b", "Bob")).unwrap()
    }

    #[test]
    fn test_start_full_lobby() {
        let state = full_table();
        let started = start_game(&state).unwrap();

        assert_eq!(started.status, GameStatus::Ongoing);
        assert_eq!(state.status, GameStatus::Lobby);
    }

    #[test]
    fn test_start_requires_all_seats() {
        let state = new_game(GameOptions::new(3).with_seed(8)).unwrap();
        let state = join_game(&state, empty_player("a", "Ada")).unwrap();

        let result = start_game(&state);
        assert!(matches!(
            result,
            Err(RulesError::SeatsOpen { seated: 1, capacity: 3 })
        ));
    }

    #[test]
    fn test_start_twice_rejected() {
        let started = start_game(&full_table()).unwrap();
        let result = start_game(&started);
        assert!(matches!(
            result,
            Err(RulesError::InvalidStatus { actual: GameStatus::Ongoing, .. })
        ));
    }

    #[test]
    fn test_refresh_marks_over() {
        let mut state = start_game(&full_table()).unwrap();
        assert_eq!(refresh_status(&state).status, GameStatus::Ongoing);

        state.tokens.strikes = 0;
        assert_eq!(refresh_status(&state).status, GameStatus::Over);
    }

    #[test]
    fn test_refresh_ignores_lobby() {
        let mut state = full_table();
        state.tokens.strikes = 0;
        assert_eq!(refresh_status(&state).status, GameStatus::Lobby);
    }
}
