//! Hint propagation into per-card knowledge.
//!
//! A hint names one attribute value. Every card in the target hand learns
//! something from it, independently of its neighbours:
//! - a matching card becomes certain of the value and rules out the rest
//! - a non-matching card rules out the value and keeps everything else
//!
//! There is no elimination across the hand, and a color hint never touches
//! number knowledge (or the other way round).

use im::Vector;
use smallvec::SmallVec;

use crate::core::{Color, GameOptions, HandCard, Hint, MAX_NUMBER, MIN_NUMBER};

/// Knowledge of `hand` after `hint` has been given to its holder.
#[must_use]
pub fn apply_hint(hand: &Vector<HandCard>, hint: Hint) -> Vector<HandCard> {
    hand.iter()
        .map(|held| {
            let mut held = held.clone();
            learn(&mut held, hint);
            held
        })
        .collect()
}

fn learn(held: &mut HandCard, hint: Hint) {
    let positive = hint.matches(&held.card);
    let knowledge = &mut held.knowledge;

    match hint {
        Hint::Color(color) if positive => knowledge.mark_color(color),
        Hint::Color(color) => knowledge.rule_out_color(color),
        Hint::Number(number) if positive => knowledge.mark_number(number),
        Hint::Number(number) => knowledge.rule_out_number(number),
    }
}

/// Positions in `hand` that `hint` points at.
#[must_use]
pub fn matching_indices(hand: &Vector<HandCard>, hint: Hint) -> SmallVec<[usize; 5]> {
    hand.iter()
        .enumerate()
        .filter(|(_, held)| hint.matches(&held.card))
        .map(|(i, _)| i)
        .collect()
}

/// Can `hint` be given in a game with these options?
#[must_use]
pub fn is_valid_hint(hint: Hint, options: &GameOptions) -> bool {
    match hint {
        Hint::Color(Color::Multicolor) => options.multicolor,
        Hint::Color(_) => true,
        Hint::Number(number) => (MIN_NUMBER..=MAX_NUMBER).contains(&number),
    }
}
