//! Key-value blob storage abstraction.
//!
//! Progress is persisted as a single serialized blob under a fixed key. The
//! port deals in opaque strings; encoding and decoding belong to the caller.

use async_trait::async_trait;

use crate::error::DomainError;

/// Storage port for string blobs addressed by key.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the blob stored under `key`, or `None` if nothing was ever written.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replace the blob stored under `key`.
    async fn put(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
