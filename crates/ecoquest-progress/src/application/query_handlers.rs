//! Query handlers for the Session & Progress context.
//!
//! Read-only view DTOs for the presentation layer. Values are computed against
//! the clock so a session left open across midnight reports the new day.

use ecoquest_content::domain::catalog::Tag;
use ecoquest_core::calendar::CalendarDate;
use ecoquest_core::clock::Clock;

use crate::domain::badge::{Badge, REWARD_CYCLE_DAYS, reward_progress};
use crate::domain::progress::DAILY_LIMIT;
use crate::domain::session::{Session, View};

/// Number of history entries shown in the history view.
pub const HISTORY_DISPLAY_LIMIT: usize = 7;

/// Header/status information shown on every screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Active view.
    pub view: View,
    /// Consecutive-day streak.
    pub streak: u32,
    /// Completions recorded today.
    pub daily_completions: u8,
    /// Completions allowed per day.
    pub daily_limit: u8,
    /// 1-based number of the next quest today, capped at the limit.
    pub next_quest_number: u8,
    /// Whether today's limit is reached.
    pub day_complete: bool,
    /// Badge for the current streak.
    pub badge: Badge,
    /// Days done in the current reward cycle.
    pub reward_progress: u32,
    /// Length of the reward cycle.
    pub reward_cycle_days: u32,
}

/// One line of the history view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntryView {
    /// Completion day.
    pub date: CalendarDate,
    /// Quest title.
    pub title: String,
    /// Quest category.
    pub tag: Tag,
}

/// The history overlay contents, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryView {
    /// Up to [`HISTORY_DISPLAY_LIMIT`] entries.
    pub entries: Vec<HistoryEntryView>,
}

/// Builds the status view for the session.
#[must_use]
pub fn status_view(session: &Session, clock: &dyn Clock) -> StatusView {
    let today = clock.today();
    let progress = session.progress();
    let daily_completions = progress.completions_on(today);
    StatusView {
        view: session.view(),
        streak: progress.streak,
        daily_completions,
        daily_limit: DAILY_LIMIT,
        next_quest_number: (daily_completions + 1).min(DAILY_LIMIT),
        day_complete: progress.is_day_complete(today),
        badge: Badge::for_streak(progress.streak),
        reward_progress: reward_progress(progress.streak),
        reward_cycle_days: REWARD_CYCLE_DAYS,
    }
}

/// Builds the history view for the session.
#[must_use]
pub fn history_view(session: &Session) -> HistoryView {
    let entries = session
        .progress()
        .history
        .iter()
        .take(HISTORY_DISPLAY_LIMIT)
        .map(|item| HistoryEntryView {
            date: item.date,
            title: item.title.clone(),
            tag: item.tag,
        })
        .collect();
    HistoryView { entries }
}
