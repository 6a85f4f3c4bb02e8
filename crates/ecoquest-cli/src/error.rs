//! Eco-Quest CLI: error types.

use ecoquest_content::domain::catalog::CatalogError;
use thiserror::Error;

/// Startup and runtime errors for the terminal front end.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The custom catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Terminal I/O error.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
