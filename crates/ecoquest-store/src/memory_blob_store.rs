//! In-memory implementation of the `BlobStore` trait, for ephemeral sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ecoquest_core::error::DomainError;
use ecoquest_core::repository::BlobStore;

/// Blob store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryBlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.blobs
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
