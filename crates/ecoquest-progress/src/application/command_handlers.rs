//! Command handlers for the Session & Progress context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: run the session transition, then persist any
//! changed progress before returning.

use ecoquest_content::domain::catalog::Catalog;
use ecoquest_core::clock::Clock;
use ecoquest_core::command::Command;
use ecoquest_core::error::DomainError;
use ecoquest_core::repository::BlobStore;
use ecoquest_core::rng::DeterministicRng;
use tracing::{error, info, instrument};

use crate::application::persistence::{load_progress, save_progress};
use crate::domain::commands::{
    ChooseTag, CompleteQuest, Confirmation, GoHome, ResetProgress, StartSession, ToggleHistory,
};
use crate::domain::session::{ChoiceOutcome, CompletionOutcome, ResetOutcome, Session, View};

/// Writes uncommitted progress through to the store.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the write fails. The session keeps
/// its progress flagged as unsaved so a later call can retry.
async fn commit(session: &mut Session, store: &dyn BlobStore) -> Result<(), DomainError> {
    if let Some(progress) = session.uncommitted_progress() {
        if let Err(e) = save_progress(store, progress).await {
            error!(error = %e, "failed to persist progress");
            return Err(e);
        }
        session.mark_saved();
    }
    Ok(())
}

/// Handles the `StartSession` command: loads stored progress (falling back to
/// an empty state) and opens a session on the appropriate view.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id()))]
pub async fn handle_start_session(
    command: &StartSession,
    catalog: &Catalog,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
    store: &dyn BlobStore,
) -> Session {
    let progress = load_progress(store).await;
    let session = Session::resume(progress, catalog, clock, rng);
    info!(
        command_type = command.command_type(),
        view = ?session.view(),
        streak = session.progress().streak,
        "session started"
    );
    session
}

/// Handles the `ChooseTag` command: assigns a random quest for the tag, or
/// redirects to `DayComplete` if today's limit is already reached.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the catalog has no quest for the tag.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id(), tag = %command.tag))]
pub fn handle_choose_tag(
    command: &ChooseTag,
    session: &mut Session,
    catalog: &Catalog,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
) -> Result<ChoiceOutcome, DomainError> {
    let outcome = session.choose(command.tag, catalog, clock, rng)?;
    match &outcome {
        ChoiceOutcome::QuestAssigned(quest) => {
            info!(quest_id = %quest.id, "quest assigned");
        }
        ChoiceOutcome::DayComplete => info!("daily limit reached, choice redirected"),
        ChoiceOutcome::Ignored => info!(view = ?session.view(), "choice ignored"),
    }
    Ok(outcome)
}

/// Handles the `CompleteQuest` command: records the active quest and persists
/// the new progress.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if persisting the progress fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id()))]
pub async fn handle_complete_quest(
    command: &CompleteQuest,
    session: &mut Session,
    catalog: &Catalog,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
    store: &dyn BlobStore,
) -> Result<CompletionOutcome, DomainError> {
    let outcome = session.complete_quest(catalog, clock, rng);
    if let CompletionOutcome::Completed {
        daily_completions,
        streak,
        day_complete,
    } = outcome
    {
        info!(daily_completions, streak, day_complete, "quest completed");
    } else {
        info!(?outcome, "completion skipped");
    }
    commit(session, store).await?;
    Ok(outcome)
}

/// Handles the `ToggleHistory` command. Returns the view now showing.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id()))]
pub fn handle_toggle_history(
    command: &ToggleHistory,
    session: &mut Session,
    catalog: &Catalog,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
) -> View {
    session.toggle_history(catalog, clock, rng);
    info!(view = ?session.view(), "history toggled");
    session.view()
}

/// Handles the `GoHome` command. Returns the view now showing.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id()))]
pub fn handle_go_home(
    command: &GoHome,
    session: &mut Session,
    catalog: &Catalog,
    clock: &dyn Clock,
    rng: &mut dyn DeterministicRng,
) -> View {
    let from = session.view();
    session.go_home(catalog, clock, rng);
    info!(?from, to = ?session.view(), "went home");
    session.view()
}

/// Handles the `ResetProgress` command: wipes and persists empty progress when
/// confirmed, does nothing otherwise.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if persisting the empty state fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id()))]
pub async fn handle_reset_progress(
    command: &ResetProgress,
    session: &mut Session,
    catalog: &Catalog,
    rng: &mut dyn DeterministicRng,
    store: &dyn BlobStore,
) -> Result<ResetOutcome, DomainError> {
    if command.confirmation == Confirmation::Declined {
        info!("reset declined");
        return Ok(ResetOutcome::Declined);
    }

    session.reset(catalog, rng);
    commit(session, store).await?;
    info!("progress reset");
    Ok(ResetOutcome::Reset)
}

#[cfg(test)]
mod tests {
    use ecoquest_content::domain::builtin::builtin_catalog;
    use ecoquest_content::domain::catalog::Tag;
    use ecoquest_core::calendar::CalendarDate;
    use ecoquest_core::error::DomainError;
    use ecoquest_test_support::{
        EmptyBlobStore, FailingBlobStore, FixedClock, MockRng, RecordingBlobStore, SequenceRng,
    };
    use uuid::Uuid;

    use super::*;
    use crate::application::persistence::{STORAGE_KEY, decode_progress, encode_progress};
    use crate::domain::progress::ProgressState;

    fn fixed_clock() -> FixedClock {
        FixedClock::ymd(2026, 10, 19)
    }

    fn store_with(progress: &ProgressState) -> RecordingBlobStore {
        RecordingBlobStore::with_blob(STORAGE_KEY, &encode_progress(progress).unwrap())
    }

    async fn start(store: &dyn BlobStore, clock: &FixedClock) -> Session {
        let command = StartSession {
            correlation_id: Uuid::new_v4(),
        };
        handle_start_session(&command, &builtin_catalog(), clock, &mut MockRng, store).await
    }

    async fn choose_and_complete(
        session: &mut Session,
        clock: &FixedClock,
        store: &dyn BlobStore,
    ) -> Result<CompletionOutcome, DomainError> {
        let catalog = builtin_catalog();
        let choose = ChooseTag {
            correlation_id: Uuid::new_v4(),
            tag: Tag::Outdoor,
        };
        handle_choose_tag(&choose, session, &catalog, clock, &mut MockRng)?;
        let complete = CompleteQuest {
            correlation_id: Uuid::new_v4(),
        };
        handle_complete_quest(&complete, session, &catalog, clock, &mut MockRng, store).await
    }

    #[tokio::test]
    async fn test_handle_start_session_on_first_run_goes_home() {
        // Arrange
        let clock = fixed_clock();

        // Act
        let session = start(&EmptyBlobStore, &clock).await;

        // Assert
        assert_eq!(session.view(), View::Home);
        assert!(session.story().is_some());
        assert_eq!(session.progress(), &ProgressState::default());
    }

    #[tokio::test]
    async fn test_handle_start_session_with_completed_day_shows_day_complete() {
        // Arrange
        let clock = fixed_clock();
        let store = store_with(&ProgressState {
            last_completed_date: Some(clock.0),
            daily_completions: 3,
            streak: 4,
            history: vec![],
        });
        let mut rng = SequenceRng::new(vec![]);
        let command = StartSession {
            correlation_id: Uuid::new_v4(),
        };

        // Act
        let session =
            handle_start_session(&command, &builtin_catalog(), &clock, &mut rng, &store).await;

        // Assert
        assert_eq!(session.view(), View::DayComplete);
        assert!(session.story().is_none());
        assert_eq!(rng.consumed(), 0);
    }

    #[tokio::test]
    async fn test_handle_start_session_with_corrupted_blob_starts_fresh() {
        let clock = fixed_clock();
        let store = RecordingBlobStore::with_blob(STORAGE_KEY, "][");

        let session = start(&store, &clock).await;

        assert_eq!(session.view(), View::Home);
        assert_eq!(session.progress(), &ProgressState::default());
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn test_handle_complete_quest_writes_through_after_each_completion() {
        // Arrange
        let clock = fixed_clock();
        let store = RecordingBlobStore::new();
        let mut session = start(&store, &clock).await;

        // Act
        for _ in 0..3 {
            choose_and_complete(&mut session, &clock, &store).await.unwrap();
        }

        // Assert
        let writes = store.writes();
        assert_eq!(writes.len(), 3);
        let persisted = decode_progress(&writes[2].1).unwrap();
        assert_eq!(persisted.daily_completions, 3);
        assert_eq!(persisted.streak, 1);
        assert_eq!(persisted.history.len(), 3);
        assert_eq!(persisted.last_completed_date, Some(clock.0));
        assert_eq!(session.view(), View::DayComplete);
    }

    #[tokio::test]
    async fn test_handle_complete_quest_continues_streak_from_yesterday() {
        // Arrange
        let clock = fixed_clock();
        let store = store_with(&ProgressState {
            last_completed_date: Some(clock.0.pred()),
            daily_completions: 0,
            streak: 2,
            history: vec![],
        });
        let mut session = start(&store, &clock).await;

        // Act
        let outcome = choose_and_complete(&mut session, &clock, &store)
            .await
            .unwrap();

        // Assert
        assert_eq!(
            outcome,
            CompletionOutcome::Completed {
                daily_completions: 1,
                streak: 3,
                day_complete: false,
            }
        );
        let persisted = decode_progress(&store.current(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(persisted.streak, 3);
    }

    #[tokio::test]
    async fn test_handle_complete_quest_resets_streak_after_gap() {
        let clock = fixed_clock();
        let store = store_with(&ProgressState {
            last_completed_date: Some(CalendarDate::from_ymd(2026, 10, 14).unwrap()),
            daily_completions: 1,
            streak: 4,
            history: vec![],
        });
        let mut session = start(&store, &clock).await;

        let outcome = choose_and_complete(&mut session, &clock, &store)
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            CompletionOutcome::Completed { streak: 1, .. }
        ));
    }

    #[tokio::test]
    async fn test_handle_complete_quest_without_quest_does_not_write() {
        let clock = fixed_clock();
        let store = RecordingBlobStore::new();
        let mut session = start(&store, &clock).await;
        let command = CompleteQuest {
            correlation_id: Uuid::new_v4(),
        };

        let outcome = handle_complete_quest(
            &command,
            &mut session,
            &builtin_catalog(),
            &clock,
            &mut MockRng,
            &store,
        )
        .await
        .unwrap();

        assert_eq!(outcome, CompletionOutcome::NoActiveQuest);
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn test_handle_complete_quest_returns_error_when_store_fails() {
        // Arrange
        let clock = fixed_clock();
        let mut session = start(&EmptyBlobStore, &clock).await;

        // Act
        let result = choose_and_complete(&mut session, &clock, &FailingBlobStore).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
        assert_eq!(session.progress().daily_completions, 1);
        assert!(session.uncommitted_progress().is_some());
    }

    #[tokio::test]
    async fn test_unsaved_progress_is_retried_on_next_write() {
        let clock = fixed_clock();
        let store = RecordingBlobStore::new();
        let mut session = start(&store, &clock).await;
        let _ = choose_and_complete(&mut session, &clock, &FailingBlobStore).await;

        choose_and_complete(&mut session, &clock, &store).await.unwrap();

        let persisted = decode_progress(&store.current(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(persisted.daily_completions, 2);
        assert!(session.uncommitted_progress().is_none());
    }

    #[tokio::test]
    async fn test_handle_reset_progress_declined_changes_nothing() {
        let clock = fixed_clock();
        let store = RecordingBlobStore::new();
        let mut session = start(&store, &clock).await;
        choose_and_complete(&mut session, &clock, &store).await.unwrap();
        let command = ResetProgress {
            correlation_id: Uuid::new_v4(),
            confirmation: Confirmation::Declined,
        };

        let outcome =
            handle_reset_progress(&command, &mut session, &builtin_catalog(), &mut MockRng, &store)
                .await
                .unwrap();

        assert_eq!(outcome, ResetOutcome::Declined);
        assert_eq!(session.progress().daily_completions, 1);
        assert_eq!(store.writes().len(), 1);
    }

    #[tokio::test]
    async fn test_handle_reset_progress_confirmed_persists_empty_state() {
        // Arrange
        let clock = fixed_clock();
        let store = store_with(&ProgressState {
            last_completed_date: Some(clock.0),
            daily_completions: 3,
            streak: 6,
            history: vec![],
        });
        let mut session = start(&store, &clock).await;
        let command = ResetProgress {
            correlation_id: Uuid::new_v4(),
            confirmation: Confirmation::Confirmed,
        };

        // Act
        let outcome =
            handle_reset_progress(&command, &mut session, &builtin_catalog(), &mut MockRng, &store)
                .await
                .unwrap();

        // Assert
        assert_eq!(outcome, ResetOutcome::Reset);
        assert_eq!(session.view(), View::Home);
        assert!(session.story().is_some());
        let persisted = decode_progress(&store.current(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(persisted, ProgressState::default());
    }

    #[tokio::test]
    async fn test_handle_toggle_history_round_trip() {
        let clock = fixed_clock();
        let mut session = start(&EmptyBlobStore, &clock).await;
        let command = ToggleHistory {
            correlation_id: Uuid::new_v4(),
        };
        let catalog = builtin_catalog();

        let first = handle_toggle_history(&command, &mut session, &catalog, &clock, &mut MockRng);
        let second = handle_toggle_history(&command, &mut session, &catalog, &clock, &mut MockRng);

        assert_eq!(first, View::History);
        assert_eq!(second, View::Home);
    }

    #[tokio::test]
    async fn test_handle_go_home_after_midnight_opens_new_day() {
        // Arrange
        let clock = fixed_clock();
        let store = store_with(&ProgressState {
            last_completed_date: Some(clock.0),
            daily_completions: 3,
            streak: 4,
            history: vec![],
        });
        let mut session = start(&store, &clock).await;
        let command = GoHome {
            correlation_id: Uuid::new_v4(),
        };
        let catalog = builtin_catalog();

        // Act
        let same_day = handle_go_home(&command, &mut session, &catalog, &clock, &mut MockRng);
        let next_day = handle_go_home(
            &command,
            &mut session,
            &catalog,
            &clock.plus_days(1),
            &mut MockRng,
        );

        // Assert
        assert_eq!(same_day, View::DayComplete);
        assert_eq!(next_day, View::Home);
        assert!(session.story().is_some());
        assert!(store.writes().is_empty());
    }
}
