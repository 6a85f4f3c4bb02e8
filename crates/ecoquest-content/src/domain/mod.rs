//! Domain types for the Content Catalog.

pub mod builtin;
pub mod catalog;
