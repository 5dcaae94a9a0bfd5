//! In-memory institution store with the same identity and timestamp
//! semantics as the PostgreSQL backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use instsync_core::{IdentityKey, InstitutionRecord, StoredInstitution};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::StorageError;
use crate::traits::{ConnectionSource, InstitutionStore};

#[derive(Debug, Default)]
struct Shared {
    rows: Mutex<Vec<StoredInstitution>>,
    open_connections: AtomicUsize,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    shared: Arc<Shared>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connections handed out and not yet dropped.
    #[must_use]
    pub fn open_connections(&self) -> usize {
        self.shared.open_connections.load(Ordering::SeqCst)
    }

    /// Copy of every stored row, in insertion order.
    pub async fn snapshot(&self) -> Vec<StoredInstitution> {
        self.shared.rows.lock().await.clone()
    }
}

#[async_trait]
impl ConnectionSource for MemoryStore {
    type Connection = MemoryConnection;

    async fn acquire(&self) -> Result<Self::Connection, StorageError> {
        self.shared.open_connections.fetch_add(1, Ordering::SeqCst);
        Ok(MemoryConnection { shared: Arc::clone(&self.shared) })
    }
}

#[derive(Debug)]
pub struct MemoryConnection {
    shared: Arc<Shared>,
}

impl Drop for MemoryConnection {
    fn drop(&mut self) {
        self.shared.open_connections.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl InstitutionStore for MemoryConnection {
    async fn find_id_by_identity(&mut self, key: &IdentityKey) -> Result<Option<Uuid>, StorageError> {
        let rows = self.shared.rows.lock().await;
        Ok(rows.iter().find(|row| row.record.identity() == *key).map(|row| row.id))
    }

    async fn insert_institution(&mut self, record: &InstitutionRecord) -> Result<Uuid, StorageError> {
        let mut rows = self.shared.rows.lock().await;
        let key = record.identity();
        if rows.iter().any(|row| row.record.identity() == key) {
            return Err(StorageError::Duplicate(format!("institution {key} already exists")));
        }
        let now = Utc::now();
        let id = Uuid::new_v4();
        rows.push(StoredInstitution { id, record: record.clone(), created_at: now, updated_at: now });
        Ok(id)
    }

    async fn update_institution(
        &mut self,
        id: Uuid,
        record: &InstitutionRecord,
    ) -> Result<(), StorageError> {
        let mut rows = self.shared.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| StorageError::NotFound { entity: "institution", id: id.to_string() })?;
        let stored = &mut row.record;
        stored.alt_names = record.alt_names.clone();
        stored.institution_type = record.institution_type.clone();
        stored.ownership = record.ownership.clone();
        stored.city_municipality = record.city_municipality.clone();
        stored.address = record.address.clone();
        stored.website = record.website.clone();
        stored.email = record.email.clone();
        stored.logo_url = record.logo_url.clone();
        stored.source = record.source.clone();
        stored.source_url = record.source_url.clone();
        stored.source_date = record.source_date;
        row.updated_at = Utc::now().max(row.updated_at);
        Ok(())
    }

    async fn get_institution(&mut self, id: Uuid) -> Result<Option<StoredInstitution>, StorageError> {
        let rows = self.shared.rows.lock().await;
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn count_institutions(&mut self) -> Result<u64, StorageError> {
        let rows = self.shared.rows.lock().await;
        Ok(rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use instsync_core::InstitutionRecord;

    use super::*;

    fn record(name: &str) -> InstitutionRecord {
        InstitutionRecord::builder(name, "NCR", "Metro Manila", "CHED")
            .institution_type("University")
            .website("https://example.edu.ph")
            .build()
    }

    #[tokio::test]
    async fn insert_then_find_by_identity() {
        let store = MemoryStore::new();
        let mut conn = store.acquire().await.unwrap();
        let id = conn.insert_institution(&record("Adamson University")).await.unwrap();

        let key = IdentityKey::new("ADAMSON UNIVERSITY", "NCR", "Metro Manila");
        assert_eq!(conn.find_id_by_identity(&key).await.unwrap(), Some(id));
        assert_eq!(conn.count_institutions().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicate_identity_insert_is_rejected() {
        let store = MemoryStore::new();
        let mut conn = store.acquire().await.unwrap();
        conn.insert_institution(&record("Adamson University")).await.unwrap();
        let err = conn.insert_institution(&record("adamson university")).await.unwrap_err();
        assert!(err.is_duplicate());
    }

    #[tokio::test]
    async fn update_keeps_name_and_overwrites_mutable_fields() {
        let store = MemoryStore::new();
        let mut conn = store.acquire().await.unwrap();
        let id = conn.insert_institution(&record("Adamson University")).await.unwrap();

        let newer = InstitutionRecord::builder("ADAMSON UNIVERSITY", "NCR", "Metro Manila", "TESDA")
            .institution_type("Institute")
            .build();
        conn.update_institution(id, &newer).await.unwrap();

        let stored = conn.get_institution(id).await.unwrap().unwrap();
        assert_eq!(stored.record.name, "Adamson University");
        assert_eq!(stored.record.institution_type, "Institute");
        assert_eq!(stored.record.source, "TESDA");
        assert!(stored.record.website.is_none());
        assert!(stored.updated_at >= stored.created_at);
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() {
        let store = MemoryStore::new();
        let mut conn = store.acquire().await.unwrap();
        let err = conn.update_institution(Uuid::new_v4(), &record("Ghost College")).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { entity: "institution", .. }));
    }

    #[tokio::test]
    async fn dropping_connection_releases_it() {
        let store = MemoryStore::new();
        let conn = store.acquire().await.unwrap();
        assert_eq!(store.open_connections(), 1);
        drop(conn);
        assert_eq!(store.open_connections(), 0);
    }
}
