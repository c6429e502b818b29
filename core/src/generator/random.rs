use super::*;

/// Draws distinct pair values uniformly from `1..=images` and shuffles the dealt deck.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, config: &GameConfig) -> Result<Deck> {
        use rand::prelude::*;

        let pairs = usize::from(config.pair_count());
        let images = usize::from(config.images);
        if images < pairs {
            return Err(ConfigError::NotEnoughImages.into());
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut cards = Vec::with_capacity(pairs * 2);
        for picked in rand::seq::index::sample(&mut rng, images, pairs) {
            // sampled indices are below `images`, so they fit a CardValue
            let value = picked as CardValue + 1;
            cards.push(Card::new(value));
            cards.push(Card::new_matching(value));
        }
        cards.shuffle(&mut rng);

        log::debug!(
            "Dealt {} cards for a {}x{} grid from {} images",
            cards.len(),
            config.rows,
            config.columns,
            config.images
        );
        Ok(Deck { cards })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    fn value_counts(deck: &Deck) -> HashMap<CardValue, usize> {
        let mut counts = HashMap::new();
        for card in deck.iter() {
            *counts.entry(card.value()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn every_value_is_dealt_twice() {
        let config = GameConfig::new(4, 5, 15).unwrap();
        let deck = RandomDeckGenerator::new(7).generate(&config).unwrap();

        assert_eq!(deck.len(), 20);
        let counts = value_counts(&deck);
        assert_eq!(counts.len(), 10);
        assert!(counts.values().all(|&count| count == 2));
        assert!(counts.keys().all(|&value| (1..=15).contains(&value)));
    }

    #[test]
    fn exact_image_count_uses_every_value() {
        let config = GameConfig::new(2, 2, 2).unwrap();
        let deck = RandomDeckGenerator::new(3).generate(&config).unwrap();
        let mut values: Vec<CardValue> = deck.iter().map(Card::value).collect();
        values.sort_unstable();
        assert_eq!(values, [1, 1, 2, 2]);
    }

    #[test]
    fn each_pair_has_one_matching_card() {
        let config = GameConfig::new(3, 4, 15).unwrap();
        let deck = RandomDeckGenerator::new(11).generate(&config).unwrap();
        let mut matching: HashMap<CardValue, usize> = HashMap::new();
        for card in deck.iter().filter(|card| card.is_matching_card()) {
            *matching.entry(card.value()).or_insert(0) += 1;
        }
        assert_eq!(matching.len(), 6);
        assert!(matching.values().all(|&count| count == 1));
    }

    #[test]
    fn same_seed_same_deck() {
        let config = GameConfig::new(4, 4, 15).unwrap();
        let a = RandomDeckGenerator::new(42).generate(&config).unwrap();
        let b = RandomDeckGenerator::new(42).generate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unchecked_config_with_few_images_is_rejected() {
        let config = GameConfig::new_unchecked(4, 4, 3);
        assert_eq!(
            RandomDeckGenerator::new(0).generate(&config),
            Err(GameError::InvalidConfiguration(ConfigError::NotEnoughImages))
        );
    }
}
