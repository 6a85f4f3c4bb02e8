//! User intents handed to the command handlers.

use uuid::Uuid;

/// Implemented by every command struct.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted name used in log fields, e.g. `progress.complete_quest`.
    fn command_type(&self) -> &'static str;

    /// Identifier tying together every log line emitted while handling one command.
    fn correlation_id(&self) -> Uuid;
}
