use alloc::vec::Vec;
use hashbrown::HashSet;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use smallvec::SmallVec;

use crate::*;

/// Game-state engine: owns the deck and resolves one card click per [`GameEngine::play`] call.
///
/// A turn is either idle or has one card pending; choosing the second card resolves the
/// turn within the same call, so no third state is ever observable.
#[derive(Clone, Debug)]
pub struct GameEngine {
    settings: GameConfig,
    cards: Vec<Card>,
    attempts: u32,
    mistakes: u32,
    is_game_over: bool,
    pending: SmallVec<[usize; 2]>,
    matched_count: CardCount,
    seen_values: HashSet<CardValue>,
    rng: SmallRng,
}

impl GameEngine {
    /// Empty engine with default settings, call [`GameEngine::initialize`] to deal a game.
    pub fn new(seed: u64) -> Self {
        Self {
            settings: GameConfig::default(),
            cards: Vec::new(),
            attempts: 0,
            mistakes: 0,
            is_game_over: false,
            pending: SmallVec::new(),
            matched_count: 0,
            seen_values: HashSet::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn settings(&self) -> GameConfig {
        self.settings
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_at(&self, index: usize) -> Result<Card> {
        self.cards.get(index).copied().ok_or(GameError::OutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Completed two-card turns.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Index of the card waiting for its partner, if any.
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    /// Cards permanently face-up in the current game.
    pub fn matched_count(&self) -> CardCount {
        self.matched_count
    }

    pub fn score(&self) -> Score {
        Score::new(self.attempts, self.mistakes)
    }

    /// Validates the grid, then deals and shuffles a fresh deck.
    ///
    /// On error the current game is left exactly as it was.
    pub fn initialize(&mut self, rows: Dim, columns: Dim, images: CardValue) -> Result<&[Card]> {
        let config = GameConfig::new(rows, columns, images)?;
        let seed = self.rng.next_u64();
        self.initialize_with(config, RandomDeckGenerator::new(seed))
    }

    /// Starts a new game with the deck produced by `generator`.
    pub fn initialize_with(
        &mut self,
        config: GameConfig,
        generator: impl DeckGenerator,
    ) -> Result<&[Card]> {
        let config = GameConfig::new(config.rows, config.columns, config.images)?;
        let deck = generator.generate(&config)?;
        if deck.len() != usize::from(config.total_cards()) {
            return Err(GameError::InvalidDeck);
        }

        self.settings = config;
        self.cards = deck.into_cards();
        self.attempts = 0;
        self.mistakes = 0;
        self.is_game_over = false;
        self.reset_turn_state();
        log::debug!(
            "New game: {}x{} grid, {} images",
            config.rows,
            config.columns,
            config.images
        );

        Ok(&self.cards)
    }

    pub fn play(&mut self, index: usize) -> Result<PlayOutcome> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(GameError::OutOfRange { index, len })?;

        if card.is_revealed() {
            log::trace!("Card {} is already facing up", index);
            return Ok(PlayOutcome::AlreadyFaceUp);
        }

        card.reveal();
        log::trace!("Flipped card {} with value {}", index, card.value());
        self.pending.push(index);

        if self.pending.len() < 2 {
            return Ok(PlayOutcome::FirstCardFlipped);
        }

        let (first, second) = (self.pending[0], self.pending[1]);
        self.pending.clear();
        Ok(self.resolve_turn(first, second))
    }

    fn resolve_turn(&mut self, first: usize, second: usize) -> PlayOutcome {
        self.attempts = self.attempts.saturating_add(1);

        let first_value = self.cards[first].value();
        let second_value = self.cards[second].value();

        if first_value != second_value {
            self.cards[first].conceal();
            self.cards[second].conceal();

            // only the first card's earlier exposure makes this a mistake
            if !self.seen_values.insert(first_value) {
                self.mistakes = self.mistakes.saturating_add(1);
            }
            self.seen_values.insert(second_value);

            log::debug!(
                "No match between {} and {}, attempts: {}, mistakes: {}",
                first,
                second,
                self.attempts,
                self.mistakes
            );
            return PlayOutcome::NoMatch(first, second);
        }

        self.matched_count += 2;
        log::debug!("Matched value {} at {} and {}", first_value, first, second);

        if usize::from(self.matched_count) == self.cards.len() {
            self.is_game_over = true;
            self.reset_turn_state();
            log::debug!(
                "Game over, attempts: {}, mistakes: {}",
                self.attempts,
                self.mistakes
            );
            PlayOutcome::GameOver {
                attempts: self.attempts,
                mistakes: self.mistakes,
            }
        } else {
            PlayOutcome::Match
        }
    }

    fn reset_turn_state(&mut self) {
        self.pending.clear();
        self.matched_count = 0;
        self.seen_values.clear();
    }
}
