use serde::{Deserialize, Serialize};

use crate::CardValue;

/// A single card: its pair value and whether it is currently face-up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    value: CardValue,
    is_revealed: bool,
    is_matching_card: bool,
}

impl Card {
    pub const fn new(value: CardValue) -> Self {
        Self {
            value,
            is_revealed: false,
            is_matching_card: false,
        }
    }

    /// The second card of a pair, only used to vary its artwork.
    pub const fn new_matching(value: CardValue) -> Self {
        Self {
            is_matching_card: true,
            ..Self::new(value)
        }
    }

    pub const fn value(&self) -> CardValue {
        self.value
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_matching_card(&self) -> bool {
        self.is_matching_card
    }

    pub fn reveal(&mut self) {
        self.is_revealed = true;
    }

    pub fn conceal(&mut self) {
        self.is_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_face_down() {
        let card = Card::new(3);
        assert_eq!(card.value(), 3);
        assert!(!card.is_revealed());
        assert!(!card.is_matching_card());
        assert!(Card::new_matching(3).is_matching_card());
    }

    #[test]
    fn reveal_and_conceal_toggle_face() {
        let mut card = Card::new(1);
        card.reveal();
        assert!(card.is_revealed());
        card.reveal();
        assert!(card.is_revealed());
        card.conceal();
        assert!(!card.is_revealed());
    }
}
