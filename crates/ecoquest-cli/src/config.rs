//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "ECOQUEST_LOG_FORMAT must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Where progress is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// One JSON file per key under the data directory.
    File,
    /// Process memory only; progress is lost on exit.
    Memory,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(StoreKind::File),
            "memory" => Ok(StoreKind::Memory),
            other => Err(AppError::Config(format!(
                "ECOQUEST_STORE must be `file` or `memory`, got `{other}`"
            ))),
        }
    }
}

/// Settings for one run of the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend for the progress blob.
    pub store: StoreKind,
    /// Directory holding the progress blob when `store` is `File`.
    pub data_dir: PathBuf,
    /// Optional YAML catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Log output format.
    pub log_format: LogFormat,
    /// Fixed RNG seed for reproducible draws.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Default data directory, relative to the working directory.
    pub const DEFAULT_DATA_DIR: &'static str = ".ecoquest";

    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let store = lookup("ECOQUEST_STORE")
            .filter(|v| !v.is_empty())
            .map_or(Ok(StoreKind::File), |v| v.parse())?;
        let data_dir = lookup("ECOQUEST_DATA_DIR")
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(Self::DEFAULT_DATA_DIR), PathBuf::from);
        let catalog_path = lookup("ECOQUEST_CATALOG")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let log_format = lookup("ECOQUEST_LOG_FORMAT")
            .map_or(Ok(LogFormat::Text), |v| v.parse())?;
        let seed = lookup("ECOQUEST_SEED")
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|e| AppError::Config(format!("ECOQUEST_SEED must be a u64: {e}")))
            })
            .transpose()?;

        Ok(Self {
            store,
            data_dir,
            catalog_path,
            log_format,
            seed,
        })
    }
}
