//! The interactive loop: read a line, run the matching command, redraw.

use ecoquest_progress::application::command_handlers::{
    handle_choose_tag, handle_complete_quest, handle_go_home, handle_reset_progress,
    handle_start_session, handle_toggle_history,
};
use ecoquest_progress::application::query_handlers::{history_view, status_view};
use ecoquest_progress::domain::commands::{
    ChooseTag, CompleteQuest, GoHome, ResetProgress, StartSession, ToggleHistory,
};
use ecoquest_progress::domain::session::{
    ChoiceOutcome, CompletionOutcome, ResetOutcome, Session, View,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::input::{Input, parse_confirmation, parse_input};
use crate::render::{HELP, RESET_PROMPT, render_screen};
use crate::state::AppState;

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Redraw, optionally with a one-line notice.
    Redraw(Option<String>),
    /// Ask the reset question and wait for the answer.
    AskReset,
    /// Stop the loop.
    Quit,
}

/// A running session bound to its ports.
#[derive(Debug)]
pub struct App {
    state: AppState,
    session: Session,
    awaiting_reset: bool,
}

impl App {
    /// Loads progress and opens the session.
    pub async fn start(mut state: AppState) -> Self {
        let command = StartSession {
            correlation_id: Uuid::new_v4(),
        };
        let session = handle_start_session(
            &command,
            &state.catalog,
            state.clock.as_ref(),
            state.rng.as_mut(),
            state.store.as_ref(),
        )
        .await;
        Self {
            state,
            session,
            awaiting_reset: false,
        }
    }

    /// The underlying session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Renders the current screen.
    #[must_use]
    pub fn screen(&self) -> String {
        let status = status_view(&self.session, self.state.clock.as_ref());
        let history = history_view(&self.session);
        render_screen(&self.session, &status, &history)
    }

    /// Handles one typed line.
    pub async fn handle_line(&mut self, line: &str) -> Step {
        if self.awaiting_reset {
            self.awaiting_reset = false;
            return self.reset(line).await;
        }

        match parse_input(line) {
            Input::Choose(n) => self.choose(n),
            Input::Complete => self.complete().await,
            Input::ToggleHistory => self.toggle_history(),
            Input::Back => self.go_home(),
            Input::Reset => {
                self.awaiting_reset = true;
                Step::AskReset
            }
            Input::Help => Step::Redraw(Some(HELP.to_owned())),
            Input::Quit => Step::Quit,
            Input::Unknown => Step::Redraw(Some("Unknown command. Type `help`.".to_owned())),
        }
    }

    fn choose(&mut self, n: usize) -> Step {
        if self.session.view() != View::Home {
            return Step::Redraw(Some("There is no story choice to make right now.".to_owned()));
        }
        let Some(tag) = self
            .session
            .story()
            .and_then(|s| s.choices.get(n - 1))
            .map(|c| c.tag)
        else {
            return Step::Redraw(Some(format!("There is no choice {n}.")));
        };

        let command = ChooseTag {
            correlation_id: Uuid::new_v4(),
            tag,
        };
        match handle_choose_tag(
            &command,
            &mut self.session,
            &self.state.catalog,
            self.state.clock.as_ref(),
            self.state.rng.as_mut(),
        ) {
            Ok(ChoiceOutcome::QuestAssigned(_) | ChoiceOutcome::Ignored) => Step::Redraw(None),
            Ok(ChoiceOutcome::DayComplete) => {
                Step::Redraw(Some("You already finished today's quests.".to_owned()))
            }
            Err(e) => {
                warn!(error = %e, "choice failed");
                Step::Redraw(Some(format!("Could not start a quest: {e}")))
            }
        }
    }

    async fn complete(&mut self) -> Step {
        let command = CompleteQuest {
            correlation_id: Uuid::new_v4(),
        };
        match handle_complete_quest(
            &command,
            &mut self.session,
            &self.state.catalog,
            self.state.clock.as_ref(),
            self.state.rng.as_mut(),
            self.state.store.as_ref(),
        )
        .await
        {
            Ok(CompletionOutcome::Completed { .. }) => {
                Step::Redraw(Some("Quest completed! 🌿".to_owned()))
            }
            Ok(CompletionOutcome::LimitReached) => {
                Step::Redraw(Some("You already finished today's quests.".to_owned()))
            }
            Ok(CompletionOutcome::NoActiveQuest) => {
                Step::Redraw(Some("There is no active quest.".to_owned()))
            }
            Err(e) => Step::Redraw(Some(format!("Progress could not be saved: {e}"))),
        }
    }

    fn toggle_history(&mut self) -> Step {
        let command = ToggleHistory {
            correlation_id: Uuid::new_v4(),
        };
        handle_toggle_history(
            &command,
            &mut self.session,
            &self.state.catalog,
            self.state.clock.as_ref(),
            self.state.rng.as_mut(),
        );
        Step::Redraw(None)
    }

    fn go_home(&mut self) -> Step {
        let command = GoHome {
            correlation_id: Uuid::new_v4(),
        };
        handle_go_home(
            &command,
            &mut self.session,
            &self.state.catalog,
            self.state.clock.as_ref(),
            self.state.rng.as_mut(),
        );
        Step::Redraw(None)
    }

    async fn reset(&mut self, answer: &str) -> Step {
        let command = ResetProgress {
            correlation_id: Uuid::new_v4(),
            confirmation: parse_confirmation(answer),
        };
        match handle_reset_progress(
            &command,
            &mut self.session,
            &self.state.catalog,
            self.state.rng.as_mut(),
            self.state.store.as_ref(),
        )
        .await
        {
            Ok(ResetOutcome::Reset) => Step::Redraw(Some("All data has been reset.".to_owned())),
            Ok(ResetOutcome::Declined) => Step::Redraw(Some("Reset cancelled.".to_owned())),
            Err(e) => Step::Redraw(Some(format!("Reset could not be saved: {e}"))),
        }
    }
}

async fn draw<W: AsyncWrite + Unpin>(
    writer: &mut W,
    app: &App,
    notice: Option<&str>,
) -> Result<(), AppError> {
    let mut frame = String::from("\n");
    if let Some(notice) = notice {
        frame.push_str(notice);
        frame.push_str("\n\n");
    }
    frame.push_str(&app.screen());
    frame.push_str("> ");
    writer.write_all(frame.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Runs the interactive loop until `quit` or end of input.
///
/// # Errors
///
/// Returns `AppError::Io` if reading input or writing output fails.
pub async fn run<R, W>(state: AppState, reader: R, mut writer: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut app = App::start(state).await;
    draw(&mut writer, &app, None).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        match app.handle_line(&line).await {
            Step::Redraw(notice) => draw(&mut writer, &app, notice.as_deref()).await?,
            Step::AskReset => {
                writer
                    .write_all(format!("{RESET_PROMPT} ").as_bytes())
                    .await?;
                writer.flush().await?;
            }
            Step::Quit => break,
        }
    }

    info!("session ended");
    writer.write_all("\nSee you tomorrow! 🌏\n".as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
