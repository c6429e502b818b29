use alloc::vec::Vec;
use core::ops::Deref;
use hashbrown::HashMap;

use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

pub trait DeckGenerator {
    fn generate(self, config: &GameConfig) -> Result<Deck>;
}

/// Cards of one game in dealing order; the index of a card is its grid position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck in the given order, the second card of each value is the matching one.
    pub fn from_values(values: &[CardValue]) -> Result<Self> {
        let mut seen: HashMap<CardValue, u8> = HashMap::with_capacity(values.len() / 2);
        let mut cards = Vec::with_capacity(values.len());

        for &value in values {
            let count = seen.entry(value).or_insert(0);
            *count += 1;
            match *count {
                1 => cards.push(Card::new(value)),
                2 => cards.push(Card::new_matching(value)),
                _ => return Err(GameError::InvalidDeck),
            }
        }

        if seen.values().any(|&count| count != 2) {
            return Err(GameError::InvalidDeck);
        }

        Ok(Self { cards })
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_marks_second_card_of_pair() {
        let deck = Deck::from_values(&[2, 1, 2, 1]).unwrap();
        let flags: Vec<bool> = deck.iter().map(Card::is_matching_card).collect();
        assert_eq!(flags, [false, false, true, true]);
        assert!(deck.iter().all(|card| !card.is_revealed()));
    }

    #[test]
    fn from_values_rejects_unpaired_values() {
        assert_eq!(Deck::from_values(&[1, 1, 2]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_values(&[1, 1, 1, 1]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_values(&[1, 2, 3, 4]), Err(GameError::InvalidDeck));
    }
}
