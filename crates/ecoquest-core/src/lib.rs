//! Eco-Quest Core: shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the content,
//! progress, and storage crates depend on. It contains no infrastructure code.

pub mod calendar;
pub mod clock;
pub mod command;
pub mod error;
pub mod repository;
pub mod rng;
