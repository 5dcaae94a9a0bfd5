//! Typed errors for the service layer.

use instsync_storage::StorageError;
use thiserror::Error;

/// A registry could not produce its records.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The registry could not be reached or returned nothing usable.
    #[error("{registry}: registry unavailable: {reason}")]
    Unavailable { registry: String, reason: String },
}

/// Service-layer error unifying fetch and storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A registry fetch failed; the sync stops before any write.
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}
