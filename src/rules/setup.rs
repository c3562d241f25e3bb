//! Game creation and seating.
//!
//! ## Deck
//!
//! Every base color has ten cards: three 1s, two each of 2-4 and one 5.
//! The multicolor variant adds a single run of 1-5 in multicolor, for 55
//! cards instead of 50.
//!
//! ## Determinism
//!
//! Deck order and starting seat both come from forks of one `GameRng`
//! seeded with `options.seed`, so any participant holding the options can
//! rebuild the initial state exactly.

use im::Vector;
use tracing::debug;

use crate::core::{
    copies_of, Card, CardKnowledge, Color, GameOptions, GameRng, GameState, GameStatus, HandCard,
    Player, PlayerId, Tokens, NUMBERS,
};
use crate::error::{Result, RulesError};

/// Build the unshuffled deck for a game.
#[must_use]
pub fn build_deck(multicolor: bool) -> Vec<Card> {
    let mut deck: Vec<Card> = Color::BASE
        .iter()
        .flat_map(|&color| {
            NUMBERS.iter().flat_map(move |&number| {
                std::iter::repeat(Card::new(color, number)).take(copies_of(number))
            })
        })
        .collect();

    if multicolor {
        deck.extend(NUMBERS.iter().map(|&number| Card::new(Color::Multicolor, number)));
    }

    deck
}

/// Create a game in the lobby.
///
/// Resolves the seed (picking a random one when absent and storing it back
/// into the options), shuffles the deck, and chooses the starting seat.
pub fn new_game(mut options: GameOptions) -> Result<GameState> {
    options.validate()?;

    let seed = *options.seed.get_or_insert_with(rand::random::<u64>);
    let mut rng = GameRng::new(seed);

    let mut deck = build_deck(options.multicolor);
    rng.fork().shuffle(&mut deck);

    let mut seats: Vec<PlayerId> = PlayerId::all(options.players_count).collect();
    rng.fork().shuffle(&mut seats);
    let current_player = seats[0];

    debug!(
        seed,
        players = options.players_count,
        multicolor = options.multicolor,
        deck = deck.len(),
        first = %current_player,
        "created game"
    );

    Ok(GameState {
        status: GameStatus::Lobby,
        actions_left: options.players_count as i32 + 1,
        options,
        players: Vector::new(),
        current_player,
        tokens: Tokens::default(),
        played_cards: Vector::new(),
        draw_pile: Vector::from(deck),
        discard_pile: Vector::new(),
    })
}

/// Seat `player` at the next free seat and deal their starting hand.
///
/// The hand comes off the front of the draw pile, sized by table size
/// (5 cards for 2-3 players, 4 for 4-5). Any hand the caller passed in is
/// replaced.
pub fn join_game(state: &GameState, player: Player) -> Result<GameState> {
    if state.is_full() {
        return Err(RulesError::TableFull {
            capacity: state.player_count(),
        });
    }

    let mut next = state.clone();

    let dealt_count = state.options.starting_hand_size().min(next.draw_pile.len());
    let rest = next.draw_pile.split_off(dealt_count);
    let dealt = std::mem::replace(&mut next.draw_pile, rest);

    let seat = PlayerId::new(next.players.len() as u8);
    let hand = dealt
        .into_iter()
        .map(|card| HandCard::new(card, empty_hint(&state.options)))
        .collect();

    debug!(seat = %seat, id = %player.id, dealt = dealt_count, "player joined");

    next.players.push_back(Player {
        index: Some(seat),
        hand,
        ..player
    });

    Ok(next)
}

/// Knowledge of a card nobody has hinted yet.
#[must_use]
pub fn empty_hint(options: &GameOptions) -> CardKnowledge {
    CardKnowledge::empty(options.multicolor)
}

/// A player ready to join: no seat, no cards.
pub fn empty_player(id: impl Into<String>, name: impl Into<String>) -> Player {
    Player::new(id, name)
}
