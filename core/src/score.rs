use core::fmt;
use serde::{Deserialize, Serialize};

/// End of game rating, the share of turns that were not mistakes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    attempts: u32,
    mistakes: u32,
}

impl Score {
    pub const fn new(attempts: u32, mistakes: u32) -> Self {
        Self { attempts, mistakes }
    }

    /// Whole percent in `0..=100`, truncated.
    pub const fn percent(&self) -> u8 {
        if self.attempts == 0 {
            return 100;
        }
        let good = self.attempts.saturating_sub(self.mistakes) as u64;
        (good * 100 / self.attempts as u64) as u8
    }

    pub const fn verdict(&self) -> &'static str {
        match self.percent() {
            100 => "Amazing job!",
            50.. => "Great job!",
            _ => "You can do better.",
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {} / 100", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn perfect_game() {
        let score = Score::new(8, 0);
        assert_eq!(score.percent(), 100);
        assert_eq!(score.verdict(), "Amazing job!");
        assert_eq!(score.to_string(), "Score: 100 / 100");
    }

    #[test]
    fn percent_is_truncated() {
        assert_eq!(Score::new(3, 1).percent(), 66);
        assert_eq!(Score::new(7, 2).percent(), 71);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Score::new(10, 5).verdict(), "Great job!");
        assert_eq!(Score::new(10, 3).verdict(), "Great job!");
        assert_eq!(Score::new(10, 6).verdict(), "You can do better.");
    }

    #[test]
    fn no_attempts_counts_as_perfect() {
        assert_eq!(Score::new(0, 0).percent(), 100);
    }
}
