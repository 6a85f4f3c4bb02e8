//! Application services for the Content Catalog.

pub mod loader;
