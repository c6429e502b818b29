use thiserror::Error;

/// Why a grid configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Both rows and columns need to be integers greater than 1")]
    TooSmall,
    #[error("Either rows or columns needs to be an even number")]
    OddTotal,
    #[error("Not enough distinct images for every pair")]
    NotEnoughImages,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Deck must hold every value exactly twice and match the grid size")]
    InvalidDeck,
    #[error("Card index {index} out of range for a deck of {len}")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
