#![no_std]

extern crate alloc;

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use score::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod generator;
mod score;
mod types;

/// How many distinct card images the browser front-end ships with.
pub const DEFAULT_IMAGES: CardValue = 15;

/// Grid sizes offered by the settings form, as `(rows, columns)`.
pub const GRID_PRESETS: [(Dim, Dim); 6] = [(2, 2), (2, 3), (3, 4), (4, 4), (4, 5), (5, 6)];

/// Grid settings of a game: `rows * columns` cards drawn from `images` possible pairs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Dim,
    pub columns: Dim,
    pub images: CardValue,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(rows: Dim, columns: Dim, images: CardValue) -> Self {
        Self {
            rows,
            columns,
            images,
        }
    }

    pub fn new(rows: Dim, columns: Dim, images: CardValue) -> Result<Self> {
        if rows < 2 || columns < 2 {
            return Err(ConfigError::TooSmall.into());
        }
        let config = Self::new_unchecked(rows, columns, images);
        if config.total_cards() % 2 != 0 {
            return Err(ConfigError::OddTotal.into());
        }
        if images < config.pair_count() {
            return Err(ConfigError::NotEnoughImages.into());
        }
        Ok(config)
    }

    pub const fn total_cards(&self) -> CardCount {
        mult(self.rows, self.columns)
    }

    pub const fn pair_count(&self) -> CardCount {
        self.total_cards() / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(2, 3, DEFAULT_IMAGES)
    }
}

/// Parses a grid option such as `"4x5"` into `(rows, columns)`.
///
/// Only the shape is checked here, the bounds are checked by [`GameConfig::new`].
pub fn parse_grid(grid: &str) -> Result<(Dim, Dim)> {
    let (rows, columns) = grid
        .trim()
        .split_once(['x', 'X'])
        .ok_or(ConfigError::TooSmall)?;
    let rows = Dim::from_str(rows.trim()).map_err(|_| ConfigError::TooSmall)?;
    let columns = Dim::from_str(columns.trim()).map_err(|_| ConfigError::TooSmall)?;
    Ok((rows, columns))
}

/// What happened when a card was played, returned to the view for rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The card was already face-up, nothing changed.
    AlreadyFaceUp,
    /// First card of a turn is now face-up.
    FirstCardFlipped,
    /// Second card matched the first, both stay face-up.
    Match,
    /// Second card did not match, both cards were turned back face-down.
    NoMatch(usize, usize),
    /// Last pair matched.
    GameOver { attempts: u32, mistakes: u32 },
}

impl PlayOutcome {
    pub const fn code(self) -> u8 {
        use PlayOutcome::*;
        match self {
            AlreadyFaceUp => 0,
            FirstCardFlipped => 1,
            Match => 2,
            NoMatch(..) => 3,
            GameOver { .. } => 4,
        }
    }

    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::AlreadyFaceUp)
    }

    pub fn message(self) -> alloc::string::String {
        use alloc::string::ToString;
        self.to_string()
    }
}

impl fmt::Display for PlayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlayOutcome::*;
        match self {
            AlreadyFaceUp => f.write_str("Card is already facing up."),
            FirstCardFlipped => f.write_str("Flip first card."),
            Match => f.write_str("Match."),
            NoMatch(..) => f.write_str("No Match. Flipping cards back."),
            GameOver { attempts, .. } => write!(f, "GAME OVER! Attempts: {}", attempts),
        }
    }
}
