use super::*;

/// Deals a fixed arrangement of values, for replaying a known layout.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetDeckGenerator {
    values: Vec<CardValue>,
}

impl PresetDeckGenerator {
    pub fn new(values: impl Into<Vec<CardValue>>) -> Self {
        Self {
            values: values.into(),
        }
    }
}

impl DeckGenerator for PresetDeckGenerator {
    fn generate(self, config: &GameConfig) -> Result<Deck> {
        if self.values.len() != usize::from(config.total_cards()) {
            log::warn!(
                "Preset deck size mismatch, got {} cards for a {}x{} grid",
                self.values.len(),
                config.rows,
                config.columns
            );
            return Err(GameError::InvalidDeck);
        }
        if self
            .values
            .iter()
            .any(|&value| value == 0 || value > config.images)
        {
            log::warn!("Preset deck uses values outside 1..={}", config.images);
            return Err(GameError::InvalidDeck);
        }
        Deck::from_values(&self.values)
    }
}
