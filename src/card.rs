use crate::constants::NUM_TOTAL_CARDS;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The palette shared by connections and cards.
///
/// # JSON
/// Colors are serialized in lowercase.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Blue,
    Green,
    Red,
    White,
}

/// Builds the referee's deck: [`NUM_TOTAL_CARDS`] cards spread evenly over every [`Color`], shuffled.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use trains::card::new_deck;
///
/// let deck = new_deck(&mut StdRng::seed_from_u64(7));
/// assert_eq!(deck.len(), 250);
/// ```
pub fn new_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Color> {
    let mut deck: Vec<_> = Color::iter()
        .cycle()
        .take(NUM_TOTAL_CARDS as usize)
        .collect();

    deck.shuffle(rng);
    deck
}
