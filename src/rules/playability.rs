//! Playability: may a card go onto the played pile?

use crate::core::Card;

/// Check whether `card` can legally be played onto `played`.
///
/// A card is playable when both hold:
/// - it is a 1, or its color's previous number has been played
/// - the exact same card (color and number) has not been played yet
///
/// The second rule is what rejects a second copy of a 1, whose first rule
/// is always satisfied.
///
/// ```
/// use rust_hanabi::core::{Card, Color};
/// use rust_hanabi::rules::is_playable;
///
/// let played = vec![Card::new(Color::Blue, 1), Card::new(Color::Blue, 2)];
/// assert!(is_playable(&Card::new(Color::Blue, 3), &played));
/// assert!(!is_playable(&Card::new(Color::Blue, 2), &played));
/// ```
pub fn is_playable<'a, I>(card: &Card, played: I) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut follows_predecessor = card.number == 1;

    for placed in played {
        if placed == card {
            return false;
        }
        if placed.color == card.color && placed.number.checked_add(1) == Some(card.number) {
            follows_predecessor = true;
        }
    }

    follows_predecessor
}
