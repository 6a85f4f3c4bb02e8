//! Filesystem implementation of the `BlobStore` trait.
//!
//! Each key maps to `<root>/<key>.json`. Writes go to a sibling temp file that
//! is then renamed over the target, so a crash mid-write leaves the previous
//! blob intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use ecoquest_core::error::DomainError;
use ecoquest_core::repository::BlobStore;

/// Directory-backed blob store.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(DomainError::Validation(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> DomainError {
    DomainError::Infrastructure(format!("{action} {}: {e}", path.display()))
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("failed to read", &path, &e)),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_error("failed to create", &self.root, &e))?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| io_error("failed to write", &tmp, &e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error("failed to replace", &path, &e))?;

        debug!(path = %path.display(), bytes = value.len(), "blob written");
        Ok(())
    }
}
