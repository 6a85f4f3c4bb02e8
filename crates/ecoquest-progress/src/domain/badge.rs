//! Streak-based badge tiers and the weekly reward cycle.

/// Length of the reward cycle in days.
pub const REWARD_CYCLE_DAYS: u32 = 7;

/// Badge earned for the current streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// Fewer than three consecutive days.
    Seed,
    /// Three to six consecutive days.
    Bronze,
    /// A week or more.
    Legend,
}

impl Badge {
    /// Tier for a given streak length.
    #[must_use]
    pub fn for_streak(streak: u32) -> Self {
        match streak {
            0..=2 => Badge::Seed,
            3..=6 => Badge::Bronze,
            _ => Badge::Legend,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Badge::Seed => "Seed 🌱",
            Badge::Bronze => "Bronze 🥉",
            Badge::Legend => "Legend 🏆",
        }
    }
}

/// Days completed within the current reward cycle.
#[must_use]
pub fn reward_progress(streak: u32) -> u32 {
    streak % REWARD_CYCLE_DAYS
}
