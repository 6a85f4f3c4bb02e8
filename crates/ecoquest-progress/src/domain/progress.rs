//! The persisted progress aggregate and its transition rules.

use ecoquest_content::domain::catalog::{Quest, Tag};
use ecoquest_core::calendar::CalendarDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum quest completions per calendar day.
pub const DAILY_LIMIT: u8 = 3;

/// Maximum number of history entries retained.
pub const HISTORY_CAP: usize = 14;

/// One completed quest. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Day the quest was completed.
    pub date: CalendarDate,
    /// Quest title at completion time.
    pub title: String,
    /// Quest category.
    pub tag: Tag,
}

/// Day-scoped counter, cross-day streak, and capped history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressState {
    /// Day of the most recent completion, if any.
    pub last_completed_date: Option<CalendarDate>,
    /// Completions on `last_completed_date`, in `[0, DAILY_LIMIT]`.
    #[serde(deserialize_with = "saturating_u8")]
    pub daily_completions: u8,
    /// Consecutive days with at least one completion.
    #[serde(deserialize_with = "saturating_u32")]
    pub streak: u32,
    /// Most-recent-first, at most `HISTORY_CAP` entries.
    pub history: Vec<HistoryItem>,
}

// Oversized stored counts saturate here; `normalized` then clamps them.
fn saturating_u8<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = u64::deserialize(deserializer)?;
    Ok(u8::try_from(raw).unwrap_or(u8::MAX))
}

fn saturating_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = u64::deserialize(deserializer)?;
    Ok(u32::try_from(raw).unwrap_or(u32::MAX))
}

impl ProgressState {
    /// Applies the day-boundary rule: when the last completion is not `today`,
    /// the daily counter restarts at zero. Streak and history are untouched.
    #[must_use]
    pub fn rolled_over(mut self, today: CalendarDate) -> Self {
        if self.last_completed_date != Some(today) {
            self.daily_completions = 0;
        }
        self
    }

    /// Completions already recorded for `today`.
    #[must_use]
    pub fn completions_on(&self, today: CalendarDate) -> u8 {
        if self.last_completed_date == Some(today) {
            self.daily_completions
        } else {
            0
        }
    }

    /// Whether the daily limit has been reached for `today`.
    #[must_use]
    pub fn is_day_complete(&self, today: CalendarDate) -> bool {
        self.completions_on(today) >= DAILY_LIMIT
    }

    /// Computes the state after completing `quest` on `today`.
    ///
    /// The streak only moves on the first completion of a day: it grows by one
    /// when the previous completion was the day before `today`, is kept when it was
    /// already `today`, and otherwise restarts at one.
    ///
    /// Returns `None` if the daily limit is already reached.
    #[must_use]
    pub fn record_completion(
        &self,
        quest: &Quest,
        today: CalendarDate,
    ) -> Option<Self> {
        let current = self.clone().rolled_over(today);
        if current.daily_completions >= DAILY_LIMIT {
            return None;
        }

        let mut streak = current.streak;
        if current.daily_completions == 0 {
            match current.last_completed_date {
                Some(last) if today.is_day_after(last) => streak = streak.saturating_add(1),
                Some(last) if last == today => {}
                _ => streak = 1,
            }
        }

        let mut history = Vec::with_capacity(HISTORY_CAP);
        history.push(HistoryItem {
            date: today,
            title: quest.title.clone(),
            tag: quest.tag,
        });
        history.extend(current.history.into_iter().take(HISTORY_CAP - 1));

        Some(Self {
            last_completed_date: Some(today),
            daily_completions: current.daily_completions + 1,
            streak,
            history,
        })
    }

    /// Clamps a decoded state back inside its invariants. Returns the state and
    /// whether anything had to change.
    #[must_use]
    pub fn normalized(mut self) -> (Self, bool) {
        let mut changed = false;
        if self.daily_completions > DAILY_LIMIT {
            self.daily_completions = DAILY_LIMIT;
            changed = true;
        }
        if self.history.len() > HISTORY_CAP {
            self.history.truncate(HISTORY_CAP);
            changed = true;
        }
        (self, changed)
    }
}
