//! Cards: colors, numbers, and the deck composition.
//!
//! A `Card` is a plain value: two cards are equal when both color and number
//! match. Knowledge about a card lives next to it in the hand (`HandCard`),
//! never on the card itself, so played and discarded cards compare cleanly.

use serde::{Deserialize, Serialize};

use super::knowledge::CardKnowledge;

/// Lowest card number.
pub const MIN_NUMBER: u8 = 1;

/// Highest card number.
pub const MAX_NUMBER: u8 = 5;

/// All card numbers in ascending order.
pub const NUMBERS: [u8; 5] = [1, 2, 3, 4, 5];

/// Card color.
///
/// `Multicolor` only exists when the game options enable it. Otherwise it
/// plays, discards and scores exactly like the five base colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Green,
    White,
    Yellow,
    Multicolor,
}

impl Color {
    /// Number of colors including the multicolor variant.
    pub const COUNT: usize = 6;

    /// Every color, in knowledge-vector order.
    pub const ALL: [Color; 6] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::White,
        Color::Yellow,
        Color::Multicolor,
    ];

    /// The five colors present in every game.
    pub const BASE: [Color; 5] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::White,
        Color::Yellow,
    ];

    /// Position of this color in a knowledge vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Colors in play for a game.
    pub fn enabled(multicolor: bool) -> impl Iterator<Item = Color> {
        Color::ALL
            .into_iter()
            .filter(move |&c| multicolor || c != Color::Multicolor)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Multicolor => "multicolor",
        };
        f.write_str(name)
    }
}

/// A card: a color and a number in `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub number: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(color: Color, number: u8) -> Self {
        Self { color, number }
    }

    /// Check the number is within `1..=5`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (MIN_NUMBER..=MAX_NUMBER).contains(&self.number)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.number)
    }
}

/// How many copies of `number` a base color has in the deck.
#[must_use]
pub const fn copies_of(number: u8) -> usize {
    match number {
        1 => 3,
        2..=4 => 2,
        5 => 1,
        _ => 0,
    }
}

/// A card held in a player's hand, together with what the table has
/// told its holder about it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandCard {
    pub card: Card,
    pub knowledge: CardKnowledge,
}

impl HandCard {
    #[must_use]
    pub fn new(card: Card, knowledge: CardKnowledge) -> Self {
        Self { card, knowledge }
    }
}
