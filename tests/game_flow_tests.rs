//! End-to-end game flow tests.
//!
//! These drive whole games through the public API the way a server would:
//! create, seat everyone, start, then commit one action per turn and check
//! the end-of-game queries after each transition.

use rust_hanabi::core::{MAX_HINTS, MAX_STRIKES};
use rust_hanabi::{
    commit_action, empty_hint, empty_player, game_over_reason, get_played_cards_pile, get_score,
    is_game_over, is_playable, join_game, new_game, refresh_status, start_game, Action, Card,
    Color, GameOptions, GameOverReason, GameState, GameStatus, HandCard, Hint, PlayerId, RulesEngine,
    StandardRules,
};

fn seated_game(options: GameOptions) -> GameState {
    let mut state = new_game(options).expect("valid options");
    for seat in 0..state.player_count() {
        state = join_game(&state, empty_player(format!("id-{seat}"), format!("Player {seat}")))
            .expect("seat available");
    }
    state
}

fn discard_first(state: &GameState) -> GameState {
    let action = Action::Discard {
        from: state.current_player,
        card_index: 0,
    };
    commit_action(state, &action).expect("discard is always legal")
}

/// Replace the current player's first card with `card`.
fn give_current_player(state: &mut GameState, card: Card) {
    let seat = state.current_player.index();
    let knowledge = empty_hint(&state.options);
    let _ = state.players[seat].hand.set(0, HandCard::new(card, knowledge));
}

/// Discarding round the table never plays a card, regains hints up to the
/// cap, and visits every seat in order.
#[test]
fn test_three_player_discard_rotation() {
    let mut state = seated_game(GameOptions::new(3).with_seed(2024));
    state.tokens.hints = 6;

    let first = state.current_player;
    let mut visited = Vec::new();

    for turn in 0..6 {
        visited.push(state.current_player);
        let hints_before = state.tokens.hints;

        state = discard_first(&state);

        assert!(state.played_cards.is_empty());
        assert_eq!(state.discard_pile.len(), turn + 1);
        assert_eq!(state.tokens.hints, (hints_before + 1).min(MAX_HINTS));
    }

    assert_eq!(state.tokens.hints, MAX_HINTS);
    assert_eq!(
        visited,
        vec![
            first,
            first.next(3),
            first.next(3).next(3),
            first,
            first.next(3),
            first.next(3).next(3),
        ]
    );
    let distinct: std::collections::HashSet<_> = visited[..3].iter().collect();
    assert_eq!(distinct.len(), 3);
}

/// A legal 5 completes its color and earns a hint back.
#[test]
fn test_playing_a_five_grants_hint() {
    let mut state = seated_game(GameOptions::new(2).with_seed(7));
    for number in 1..=4 {
        state.played_cards.push_back(Card::new(Color::Blue, number));
    }
    let five = Card::new(Color::Blue, 5);
    give_current_player(&mut state, five);
    state.tokens.hints = 3;

    let me = state.current_player;
    let next = commit_action(&state, &Action::Play { from: me, card_index: 0, card: five }).unwrap();

    assert_eq!(next.tokens.hints, 4);
    assert_eq!(next.played_cards.back(), Some(&five));
    assert_eq!(next.played_cards.len(), 5);
    assert_eq!(get_played_cards_pile(&next).get(&Color::Blue), Some(&5));
}

/// The bonus for a 5 is not capped.
#[test]
fn test_five_bonus_with_full_hints() {
    let mut state = seated_game(GameOptions::new(2).with_seed(7));
    for number in 1..=4 {
        state.played_cards.push_back(Card::new(Color::Red, number));
    }
    let five = Card::new(Color::Red, 5);
    give_current_player(&mut state, five);

    let me = state.current_player;
    let next = commit_action(&state, &Action::Play { from: me, card_index: 0, card: five }).unwrap();

    assert_eq!(next.tokens.hints, MAX_HINTS + 1);
}

/// An illegal play costs a strike and lands the supplied card in the discard pile.
#[test]
fn test_illegal_play_strikes() {
    let mut state = seated_game(GameOptions::new(2).with_seed(7));
    let three = Card::new(Color::Green, 3);
    give_current_player(&mut state, three);

    let me = state.current_player;
    let next = commit_action(&state, &Action::Play { from: me, card_index: 0, card: three }).unwrap();

    assert_eq!(next.tokens.strikes, MAX_STRIKES - 1);
    assert_eq!(next.discard_pile.back(), Some(&three));
    assert!(next.played_cards.is_empty());
}

/// Three misplays end the game regardless of anything else.
#[test]
fn test_three_strikes_end_game() {
    let mut state = start_game(&seated_game(GameOptions::new(3).with_seed(99))).unwrap();

    for _ in 0..3 {
        assert!(!is_game_over(&state));
        let four = Card::new(Color::White, 4);
        give_current_player(&mut state, four);
        let me = state.current_player;
        state = commit_action(&state, &Action::Play { from: me, card_index: 0, card: four }).unwrap();
        state = refresh_status(&state);
    }

    assert_eq!(state.tokens.strikes, 0);
    assert!(is_game_over(&state));
    assert_eq!(game_over_reason(&state), Some(GameOverReason::StrikesExhausted));
    assert_eq!(state.status, GameStatus::Over);
}

/// Transitions stay mechanically valid past the logical end of the game.
#[test]
fn test_transitions_continue_after_game_over() {
    let mut state = seated_game(GameOptions::new(2).with_seed(5));
    state.tokens.strikes = 0;
    assert!(is_game_over(&state));

    let next = discard_first(&state);
    assert_eq!(next.current_player, state.current_player.next(2));
    assert_eq!(next.tokens.strikes, 0);
}

/// Discarding every turn runs the draw pile dry, then the countdown ends the game.
#[test]
fn test_discard_until_actions_exhausted() {
    let mut state = start_game(&seated_game(GameOptions::new(3).with_seed(31))).unwrap();
    let deck_after_deal = state.draw_pile.len();
    assert_eq!(deck_after_deal, 35);

    let mut turns = 0;
    while !is_game_over(&state) {
        state = discard_first(&state);
        state = refresh_status(&state);
        turns += 1;
        assert!(turns <= 100, "game should have ended");
    }

    // 35 draws empty the pile (the last one already counts down), then 3 more turns
    assert_eq!(turns, deck_after_deal + 3);
    assert_eq!(state.actions_left, 0);
    assert_eq!(game_over_reason(&state), Some(GameOverReason::ActionsExhausted));
    assert_eq!(state.status, GameStatus::Over);
    assert_eq!(get_score(&state), 0);
}

/// A scripted team that can see its own cards: play when legal, else discard.
/// Whatever happens, the played pile must stay a valid ascending run per color.
#[test]
fn test_scripted_game_keeps_pile_consistent() {
    let rules = StandardRules;

    for seed in [1u64, 2, 3, 4, 5] {
        let mut state = start_game(&seated_game(GameOptions::new(4).with_multicolor().with_seed(seed))).unwrap();
        let mut turns = 0;

        while rules.is_terminal(&state).is_none() && turns < 500 {
            let actions = rules.legal_actions(&state);
            let action = actions
                .iter()
                .find(|a| matches!(a, Action::Play { card, .. } if is_playable(card, &state.played_cards)))
                .or_else(|| actions.iter().find(|a| matches!(a, Action::Discard { .. })))
                .cloned()
                .expect("a hand is never empty before the game ends");

            state = rules.apply_action(&state, &action).unwrap();
            turns += 1;
        }

        assert!(rules.is_terminal(&state).is_some(), "seed {seed} did not finish");
        assert_eq!(rules.score(&state), state.played_cards.len());
        assert_eq!(state.tokens.strikes, MAX_STRIKES, "script never misplays");

        let pile = get_played_cards_pile(&state);
        for (color, top) in &pile {
            let run: Vec<u8> = state
                .played_cards
                .iter()
                .filter(|c| c.color == *color)
                .map(|c| c.number)
                .collect();
            assert_eq!(run, (1..=*top).collect::<Vec<_>>());
        }
        assert_eq!(pile.values().map(|&n| n as usize).sum::<usize>(), get_score(&state));
    }
}

/// Every card stays accounted for across a whole game.
#[test]
fn test_card_conservation() {
    let mut state = seated_game(GameOptions::new(5).with_seed(77));
    let rules = StandardRules;

    for _ in 0..60 {
        if rules.is_terminal(&state).is_some() {
            break;
        }
        let actions = rules.legal_actions(&state);
        let action = actions[state.draw_pile.len() % actions.len()].clone();
        state = rules.apply_action(&state, &action).unwrap();

        let in_hands: usize = state.players.iter().map(|p| p.hand.len()).sum();
        let total = in_hands + state.draw_pile.len() + state.played_cards.len() + state.discard_pile.len();
        assert_eq!(total, 50);
    }
}

/// Same seed and same actions give the same states on every participant.
#[test]
fn test_deterministic_replay() {
    let options = GameOptions::new(3).with_seed(12345);
    let mut a = seated_game(options.clone());
    let mut b = seated_game(options);
    assert_eq!(a, b);

    let rules = StandardRules;
    for _ in 0..20 {
        let action = rules.legal_actions(&a).last().cloned().unwrap();
        a = rules.apply_action(&a, &action).unwrap();
        b = rules.apply_action(&b, &action).unwrap();
        assert_eq!(a, b);
    }
}

/// A mid-game state survives both wire formats unchanged.
#[test]
fn test_state_roundtrips() {
    let mut state = seated_game(GameOptions::new(2).with_multicolor().with_seed(3));
    let me = state.current_player;
    state = commit_action(
        &state,
        &Action::Hint { from: me, to: me.next(2), hint: Hint::Number(1) },
    )
    .unwrap();
    state = discard_first(&state);

    let json = serde_json::to_string(&state).unwrap();
    let from_json: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, state);

    let bytes = state.to_bytes().unwrap();
    assert_eq!(GameState::from_bytes(&bytes).unwrap(), state);

    // The decoded state keeps playing identically
    let next_a = discard_first(&state);
    let next_b = discard_first(&from_json);
    assert_eq!(next_a, next_b);
}

/// Seats are assigned in join order whatever the starting player is.
#[test]
fn test_seats_follow_join_order() {
    let state = seated_game(GameOptions::new(5).with_seed(8));
    for (i, player) in state.players.iter().enumerate() {
        assert_eq!(player.index, Some(PlayerId::new(i as u8)));
        assert_eq!(player.id, format!("id-{i}"));
        assert_eq!(player.hand.len(), 4);
    }
}
