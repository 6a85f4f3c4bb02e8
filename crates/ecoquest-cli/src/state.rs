//! Shared application state: the catalog plus the injected ports.

use std::sync::Arc;

use ecoquest_content::application::loader::load_catalog;
use ecoquest_content::domain::builtin::builtin_catalog;
use ecoquest_content::domain::catalog::Catalog;
use ecoquest_core::clock::{Clock, SystemClock};
use ecoquest_core::repository::BlobStore;
use ecoquest_core::rng::{DeterministicRng, SystemRng};
use ecoquest_store::file_blob_store::FileBlobStore;
use ecoquest_store::memory_blob_store::MemoryBlobStore;
use tracing::info;

use crate::config::{AppConfig, StoreKind};
use crate::error::AppError;

/// Everything a session needs from the outside world.
pub struct AppState {
    /// Stories and quests.
    pub catalog: Arc<Catalog>,
    /// Calendar source.
    pub clock: Arc<dyn Clock>,
    /// Random source for story and quest draws.
    pub rng: Box<dyn DeterministicRng>,
    /// Persistence for the progress blob.
    pub store: Arc<dyn BlobStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        clock: Arc<dyn Clock>,
        rng: Box<dyn DeterministicRng>,
        store: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            catalog,
            clock,
            rng,
            store,
        }
    }

    /// Builds production state from `config`: system clock, OS-seeded (or
    /// configured) RNG, the selected store, and the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if a custom catalog fails to load.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog(path).await?,
            None => builtin_catalog(),
        };
        let rng: Box<dyn DeterministicRng> = match config.seed {
            Some(seed) => {
                info!(seed, "using seeded rng");
                Box::new(SystemRng::seeded(seed))
            }
            None => Box::new(SystemRng::from_os()),
        };
        let store: Arc<dyn BlobStore> = match config.store {
            StoreKind::File => {
                let store = FileBlobStore::new(config.data_dir.clone());
                info!(data_dir = %store.root().display(), "using file store");
                Arc::new(store)
            }
            StoreKind::Memory => {
                info!("using in-memory store, progress will not outlive this run");
                Arc::new(MemoryBlobStore::new())
            }
        };

        Ok(Self::new(Arc::new(catalog), Arc::new(SystemClock), rng, store))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("stories", &self.catalog.stories().len())
            .field("quests", &self.catalog.quests().len())
            .field("today", &self.clock.today())
            .finish_non_exhaustive()
    }
}
