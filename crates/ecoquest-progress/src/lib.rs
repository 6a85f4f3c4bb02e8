//! Eco-Quest: Session & Progress.
//!
//! Responsible for the daily completion counter, the cross-day streak, the
//! bounded history log, and the view state machine that drives a session.

pub mod application;
pub mod domain;
