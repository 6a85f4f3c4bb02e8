//! Eco-Quest: Content Catalog.
//!
//! Static narrative prompts and quests, each quest tagged by category. The
//! catalog is immutable for the process lifetime: either the built-in set or
//! one loaded from a YAML file at startup.

pub mod application;
pub mod domain;
