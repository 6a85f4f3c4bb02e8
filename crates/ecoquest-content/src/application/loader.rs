//! Catalog loading from YAML sources.
//!
//! Expected document shape:
//!
//! ```yaml
//! stories:
//!   - id: s1
//!     text: "..."
//!     choices:
//!       - { label: "...", tag: outdoor }
//! quests:
//!   - { id: q1, title: "...", desc: "...", tag: outdoor }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::catalog::{Catalog, CatalogError, Quest, Story};

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    stories: Vec<Story>,
    #[serde(default)]
    quests: Vec<Quest>,
}

/// Parses and validates a catalog from YAML text.
///
/// # Errors
///
/// Returns `CatalogError::Source` if the YAML is malformed, or the relevant
/// validation error if the catalog is inconsistent.
pub fn parse_catalog(source: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument =
        serde_yaml::from_str(source).map_err(|e| CatalogError::Source(e.to_string()))?;
    debug!(
        stories = document.stories.len(),
        quests = document.quests.len(),
        "parsed catalog document"
    );
    Catalog::new(document.stories, document.quests)
}

/// Reads, parses, and validates a catalog file.
///
/// # Errors
///
/// Returns `CatalogError::Source` if the file cannot be read or parsed, or the
/// relevant validation error if the catalog is inconsistent.
pub async fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::Source(format!("{}: {e}", path.display())))?;
    let catalog = parse_catalog(&source)?;
    info!(path = %path.display(), stories = catalog.stories().len(), quests = catalog.quests().len(), "loaded catalog");
    Ok(catalog)
}
