//! Encoding and storage of the progress blob.
//!
//! Progress lives under a single fixed key as a JSON object with the fields
//! `lastCompletedDate`, `dailyCompletions`, `streak`, and `history`.

use ecoquest_core::error::DomainError;
use ecoquest_core::repository::BlobStore;
use tracing::{debug, warn};

use crate::domain::progress::ProgressState;

/// Key under which progress is stored.
pub const STORAGE_KEY: &str = "eco_quest_user_state";

/// Serializes progress to its JSON blob form.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if serialization fails.
pub fn encode_progress(progress: &ProgressState) -> Result<String, DomainError> {
    serde_json::to_string(progress)
        .map_err(|e| DomainError::Infrastructure(format!("progress serialization failed: {e}")))
}

/// Parses a JSON blob and clamps it back inside the progress invariants.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the blob is not a valid progress object.
pub fn decode_progress(blob: &str) -> Result<ProgressState, DomainError> {
    let progress: ProgressState = serde_json::from_str(blob)
        .map_err(|e| DomainError::Validation(format!("corrupted progress blob: {e}")))?;
    let (progress, changed) = progress.normalized();
    if changed {
        warn!("stored progress was out of range and has been clamped");
    }
    Ok(progress)
}

/// Loads progress, falling back to an empty state when nothing is stored or
/// the stored blob cannot be read or decoded.
pub async fn load_progress(store: &dyn BlobStore) -> ProgressState {
    match store.get(STORAGE_KEY).await {
        Ok(Some(blob)) => match decode_progress(&blob) {
            Ok(progress) => {
                debug!(
                    streak = progress.streak,
                    daily_completions = progress.daily_completions,
                    history = progress.history.len(),
                    "loaded progress"
                );
                progress
            }
            Err(e) => {
                warn!(error = %e, "discarding unreadable progress");
                ProgressState::default()
            }
        },
        Ok(None) => {
            debug!("no stored progress, starting fresh");
            ProgressState::default()
        }
        Err(e) => {
            warn!(error = %e, "progress store unavailable, starting fresh");
            ProgressState::default()
        }
    }
}

/// Writes progress under [`STORAGE_KEY`].
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if encoding or the write fails.
pub async fn save_progress(
    store: &dyn BlobStore,
    progress: &ProgressState,
) -> Result<(), DomainError> {
    let blob = encode_progress(progress)?;
    store.put(STORAGE_KEY, &blob).await
}
