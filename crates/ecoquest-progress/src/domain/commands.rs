//! Commands for the Session & Progress context.

use ecoquest_content::domain::catalog::Tag;
use ecoquest_core::command::Command;
use uuid::Uuid;

/// Command to open a session: load persisted progress and pick the first view.
#[derive(Debug, Clone)]
pub struct StartSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for StartSession {
    fn command_type(&self) -> &'static str {
        "progress.start_session"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command sent when the user picks a story choice.
#[derive(Debug, Clone)]
pub struct ChooseTag {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Tag of the chosen option.
    pub tag: Tag,
}

impl Command for ChooseTag {
    fn command_type(&self) -> &'static str {
        "progress.choose_tag"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command sent when the user marks the active quest as done.
#[derive(Debug, Clone)]
pub struct CompleteQuest {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for CompleteQuest {
    fn command_type(&self) -> &'static str {
        "progress.complete_quest"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to switch between the history log and the day-cycle view.
#[derive(Debug, Clone)]
pub struct ToggleHistory {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ToggleHistory {
    fn command_type(&self) -> &'static str {
        "progress.toggle_history"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to go back to the day-cycle view from history or a finished day.
#[derive(Debug, Clone)]
pub struct GoHome {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for GoHome {
    fn command_type(&self) -> &'static str {
        "progress.go_home"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// The user's answer to the reset prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The user agreed to wipe all progress.
    Confirmed,
    /// The user backed out.
    Declined,
}

/// Command to wipe all progress.
#[derive(Debug, Clone)]
pub struct ResetProgress {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Whether the user confirmed the reset.
    pub confirmation: Confirmation,
}

impl Command for ResetProgress {
    fn command_type(&self) -> &'static str {
        "progress.reset_progress"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
