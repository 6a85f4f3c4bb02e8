//! The session aggregate: progress plus the derived view state machine.
//!
//! `Home` waits for a story choice, `QuestActive` waits for completion,
//! `DayComplete` is reached once the daily limit is hit, and `History` is an
//! overlay that always returns to a freshly recomputed day-cycle view.

use ecoquest_content::domain::catalog::{Catalog, Quest, Story, Tag};
use ecoquest_core::clock::Clock;
use ecoquest_core::error::DomainError;
use ecoquest_core::rng::DeterministicRng;

use super::progress::ProgressState;

/// The view the presentation layer should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// A story is shown and a choice is pending.
    Home,
    /// A quest is assigned and awaiting completion.
    QuestActive,
    /// Today's limit has been reached.
    DayComplete,
    /// The history log overlay.
    History,
}

/// Result of a story choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// A quest was drawn and is now active.
    QuestAssigned(Quest),
    /// The daily limit was already reached; the view moved to `DayComplete`.
    DayComplete,
    /// No choice is pending in the current view.
    Ignored,
}

/// Result of a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The quest was recorded.
    Completed {
        /// Completions today after this one.
        daily_completions: u8,
        /// Streak after this completion.
        streak: u32,
        /// Whether this completion reached the daily limit.
        day_complete: bool,
    },
    /// The daily limit was already reached; nothing was recorded.
    LimitReached,
    /// There was no active quest to complete.
    NoActiveQuest,
}

/// Result of a reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Progress was wiped.
    Reset,
    /// The user declined; nothing changed.
    Declined,
}

/// The aggregate root for one interactive session.
#[derive(Debug)]
pub struct Session {
    progress: ProgressState,
    view: View,
    story: Option<Story>,
    quest: Option<Quest>,
    /// Set when `progress` differs from what was last persisted.
    unsaved: bool,
}

impl Session {
    /// Opens a session over previously persisted progress.
    ///
    /// Goes straight to `DayComplete` (without drawing a story) when today's
    /// limit is already reached, otherwise to `Home` with a random story.
    #[must_use]
    pub fn resume(
        progress: ProgressState,
        catalog: &Catalog,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Self {
        let today = clock.today();
        let mut session = Self {
            progress: progress.rolled_over(today),
            view: View::Home,
            story: None,
            quest: None,
            unsaved: false,
        };
        if session.progress.is_day_complete(today) {
            session.view = View::DayComplete;
        } else {
            session.draw_story(catalog, rng);
        }
        session
    }

    /// Current progress snapshot.
    #[must_use]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    /// Current view.
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// Story shown on `Home`, if one is held.
    #[must_use]
    pub fn story(&self) -> Option<&Story> {
        self.story.as_ref()
    }

    /// Quest awaiting completion, if any.
    #[must_use]
    pub fn quest(&self) -> Option<&Quest> {
        self.quest.as_ref()
    }

    /// Progress that has changed since the last successful save.
    #[must_use]
    pub fn uncommitted_progress(&self) -> Option<&ProgressState> {
        self.unsaved.then_some(&self.progress)
    }

    /// Marks the current progress as persisted.
    pub fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    /// Handles a story choice by drawing a quest tagged `tag`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the catalog has no quest for `tag`.
    pub fn choose(
        &mut self,
        tag: Tag,
        catalog: &Catalog,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<ChoiceOutcome, DomainError> {
        if self.view != View::Home {
            return Ok(ChoiceOutcome::Ignored);
        }

        if self.refresh_day(clock) {
            return Ok(ChoiceOutcome::DayComplete);
        }

        let candidates = catalog.quests_for(tag);
        let idx = rng
            .pick_index(candidates.len())
            .ok_or_else(|| DomainError::Validation(format!("no quests tagged {tag}")))?;
        let quest = candidates[idx].clone();

        self.quest = Some(quest.clone());
        self.view = View::QuestActive;
        Ok(ChoiceOutcome::QuestAssigned(quest))
    }

    /// Records completion of the active quest.
    ///
    /// On success the view moves to `DayComplete` when the limit is reached,
    /// otherwise back to `Home` with a newly drawn story.
    pub fn complete_quest(
        &mut self,
        catalog: &Catalog,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> CompletionOutcome {
        if self.view != View::QuestActive {
            return CompletionOutcome::NoActiveQuest;
        }
        let Some(quest) = self.quest.take() else {
            return CompletionOutcome::NoActiveQuest;
        };

        if self.refresh_day(clock) {
            return CompletionOutcome::LimitReached;
        }

        let today = clock.today();
        let Some(next) = self.progress.record_completion(&quest, today) else {
            self.view = View::DayComplete;
            return CompletionOutcome::LimitReached;
        };
        self.progress = next;
        self.unsaved = true;

        let day_complete = self.progress.is_day_complete(today);
        if day_complete {
            self.view = View::DayComplete;
            self.story = None;
        } else {
            self.view = View::Home;
            self.draw_story(catalog, rng);
        }

        CompletionOutcome::Completed {
            daily_completions: self.progress.daily_completions,
            streak: self.progress.streak,
            day_complete,
        }
    }

    /// Opens the history overlay.
    pub fn view_history(&mut self) {
        self.view = View::History;
    }

    /// Leaves the history overlay, recomputing the day-cycle view from
    /// progress rather than from whatever was shown before.
    pub fn back(&mut self, catalog: &Catalog, clock: &dyn Clock, rng: &mut dyn DeterministicRng) {
        if self.view != View::History {
            return;
        }
        self.quest = None;
        if !self.refresh_day(clock) {
            self.view = View::Home;
            if self.story.is_none() {
                self.draw_story(catalog, rng);
            }
        }
    }

    /// Switches between the history overlay and the day-cycle view.
    pub fn toggle_history(
        &mut self,
        catalog: &Catalog,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) {
        if self.view == View::History {
            self.back(catalog, clock, rng);
        } else {
            self.view_history();
        }
    }

    /// Returns to the day-cycle view. From `History` this is [`Session::back`];
    /// from `DayComplete` it moves to `Home` once the day has rolled over.
    /// An active quest is kept.
    pub fn go_home(&mut self, catalog: &Catalog, clock: &dyn Clock, rng: &mut dyn DeterministicRng) {
        match self.view {
            View::History => self.back(catalog, clock, rng),
            View::DayComplete | View::Home => {
                if !self.refresh_day(clock) {
                    self.view = View::Home;
                    if self.story.is_none() {
                        self.draw_story(catalog, rng);
                    }
                }
            }
            View::QuestActive => {}
        }
    }

    /// Wipes progress and restarts at `Home` with a fresh story.
    pub fn reset(&mut self, catalog: &Catalog, rng: &mut dyn DeterministicRng) {
        self.progress = ProgressState::default();
        self.unsaved = true;
        self.quest = None;
        self.view = View::Home;
        self.draw_story(catalog, rng);
    }

    /// Applies the day boundary and, if today's limit is reached, moves to
    /// `DayComplete`. Returns whether the day is complete.
    fn refresh_day(&mut self, clock: &dyn Clock) -> bool {
        let today = clock.today();
        self.progress = std::mem::take(&mut self.progress).rolled_over(today);
        if self.progress.is_day_complete(today) {
            self.view = View::DayComplete;
            self.quest = None;
            self.story = None;
            true
        } else {
            false
        }
    }

    fn draw_story(&mut self, catalog: &Catalog, rng: &mut dyn DeterministicRng) {
        let stories = catalog.stories();
        self.story = rng.pick_index(stories.len()).map(|i| stories[i].clone());
    }
}
