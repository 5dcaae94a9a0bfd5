//! Storage trait abstraction
//!
//! A [`ConnectionSource`] hands out one scoped connection per sync; the
//! connection implements [`InstitutionStore`]. Dropping the connection
//! releases it, on success and error paths alike.

use async_trait::async_trait;
use instsync_core::{IdentityKey, InstitutionRecord, StoredInstitution};
use uuid::Uuid;

use crate::error::StorageError;

/// Reads and writes against the `institutions` table over one connection.
#[async_trait]
pub trait InstitutionStore: Send {
    /// Id of the stored row with this identity, if any.
    async fn find_id_by_identity(&mut self, key: &IdentityKey) -> Result<Option<Uuid>, StorageError>;

    /// Insert a new row. The store assigns and returns the id.
    async fn insert_institution(&mut self, record: &InstitutionRecord) -> Result<Uuid, StorageError>;

    /// Overwrite every mutable field of row `id` and refresh `updated_at`.
    /// `name`, `region` and `province` are left untouched.
    async fn update_institution(
        &mut self,
        id: Uuid,
        record: &InstitutionRecord,
    ) -> Result<(), StorageError>;

    /// Get a stored row by id.
    async fn get_institution(&mut self, id: Uuid) -> Result<Option<StoredInstitution>, StorageError>;

    /// Number of stored rows.
    async fn count_institutions(&mut self) -> Result<u64, StorageError>;
}

/// Hands out scoped connections.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    type Connection: InstitutionStore;

    /// Check out a connection. It is released when dropped.
    async fn acquire(&self) -> Result<Self::Connection, StorageError>;
}
