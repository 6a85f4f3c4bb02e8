//! Domain model for the Session & Progress context.

pub mod badge;
pub mod commands;
pub mod progress;
pub mod session;
