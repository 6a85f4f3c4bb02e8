//! Eco-Quest terminal front end.
//!
//! Renders the active view as text and turns typed lines into session
//! commands. All progress rules live in `ecoquest-progress`.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod state;
