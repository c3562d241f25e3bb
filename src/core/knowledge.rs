//! Per-card knowledge built from hints.
//!
//! Each card in a hand carries two independent vectors of tri-state weights,
//! one over colors and one over numbers. These are constraint markers, not a
//! probability distribution:
//!
//! - `Impossible`: a hint ruled the value out
//! - `Possible`: nothing is known (the default)
//! - `Certain`: a hint pinned the attribute to this value
//!
//! ## Invariant
//!
//! A vector holds at most one `Certain` entry. `mark_certain` is the only way
//! to create one and it rules out every sibling in the same call.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Color, MAX_NUMBER, MIN_NUMBER};

/// Tri-state knowledge weight. Serialized as `0`, `1` or `2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Weight {
    Impossible,
    #[default]
    Possible,
    Certain,
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> u8 {
        match weight {
            Weight::Impossible => 0,
            Weight::Possible => 1,
            Weight::Certain => 2,
        }
    }
}

impl TryFrom<u8> for Weight {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Weight::Impossible),
            1 => Ok(Weight::Possible),
            2 => Ok(Weight::Certain),
            other => Err(format!("knowledge weight must be 0, 1 or 2, got {other}")),
        }
    }
}

/// One knowledge vector, indexed by slot.
///
/// Colors use `Color::index()` as slot; numbers use `number - 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KnowledgeVector(SmallVec<[Weight; 6]>);

impl KnowledgeVector {
    fn filled(len: usize) -> Self {
        Self(SmallVec::from_elem(Weight::Possible, len))
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Weight at `slot`. Slots outside the vector are impossible.
    #[must_use]
    pub fn get(&self, slot: usize) -> Weight {
        self.0.get(slot).copied().unwrap_or(Weight::Impossible)
    }

    /// Pin the vector to `slot`: it becomes certain, every other slot impossible.
    pub fn mark_certain(&mut self, slot: usize) {
        for (i, weight) in self.0.iter_mut().enumerate() {
            *weight = if i == slot {
                Weight::Certain
            } else {
                Weight::Impossible
            };
        }
    }

    /// Rule out `slot`, leaving the others untouched.
    pub fn rule_out(&mut self, slot: usize) {
        if let Some(weight) = self.0.get_mut(slot) {
            *weight = Weight::Impossible;
        }
    }

    /// The certain slot, if any.
    #[must_use]
    pub fn certain(&self) -> Option<usize> {
        self.0.iter().position(|&w| w == Weight::Certain)
    }

    /// Slots that have not been ruled out.
    pub fn candidates(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != Weight::Impossible)
            .map(|(i, _)| i)
    }

    /// Iterate over all weights in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Weight> + '_ {
        self.0.iter().copied()
    }
}

fn number_slot(number: u8) -> Option<usize> {
    (MIN_NUMBER..=MAX_NUMBER)
        .contains(&number)
        .then(|| usize::from(number - MIN_NUMBER))
}

/// What a card's holder has been told about it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardKnowledge {
    pub color: KnowledgeVector,
    pub number: KnowledgeVector,
}

impl CardKnowledge {
    /// Knowledge of a freshly drawn card: everything possible, except
    /// multicolor when the variant is disabled.
    #[must_use]
    pub fn empty(multicolor: bool) -> Self {
        let mut color = KnowledgeVector::filled(Color::COUNT);
        if !multicolor {
            color.rule_out(Color::Multicolor.index());
        }
        Self {
            color,
            number: KnowledgeVector::filled(usize::from(MAX_NUMBER)),
        }
    }

    #[must_use]
    pub fn color_weight(&self, color: Color) -> Weight {
        self.color.get(color.index())
    }

    /// Weight of `number`. Numbers outside `1..=5` are impossible.
    #[must_use]
    pub fn number_weight(&self, number: u8) -> Weight {
        number_slot(number).map_or(Weight::Impossible, |slot| self.number.get(slot))
    }

    /// The color a hint has pinned down, if any.
    #[must_use]
    pub fn known_color(&self) -> Option<Color> {
        self.color.certain().map(|slot| Color::ALL[slot])
    }

    /// The number a hint has pinned down, if any.
    #[must_use]
    pub fn known_number(&self) -> Option<u8> {
        self.number.certain().map(|slot| slot as u8 + MIN_NUMBER)
    }

    pub fn mark_color(&mut self, color: Color) {
        self.color.mark_certain(color.index());
    }

    pub fn rule_out_color(&mut self, color: Color) {
        self.color.rule_out(color.index());
    }

    pub fn mark_number(&mut self, number: u8) {
        if let Some(slot) = number_slot(number) {
            self.number.mark_certain(slot);
        }
    }

    pub fn rule_out_number(&mut self, number: u8) {
        if let Some(slot) = number_slot(number) {
            self.number.rule_out(slot);
        }
    }
}
