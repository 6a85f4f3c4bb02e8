//! Application layer: command handlers, query handlers, and persistence.

pub mod command_handlers;
pub mod persistence;
pub mod query_handlers;
