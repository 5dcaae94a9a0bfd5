//! Insert-or-update of one institution keyed by its identity.

use instsync_core::{InstitutionRecord, UpsertOutcome, generate_logo_url};
use instsync_storage::{InstitutionStore, StorageError};

/// Writes `record` through `conn`: one identity lookup, then exactly one
/// insert or update. A missing `logo_url` is generated from the name first.
pub async fn upsert_institution<C>(
    conn: &mut C,
    mut record: InstitutionRecord,
) -> Result<UpsertOutcome, StorageError>
where
    C: InstitutionStore + ?Sized,
{
    if record.logo_url.is_none() {
        record.logo_url = Some(generate_logo_url(&record.name));
    }

    let key = record.identity();
    match conn.find_id_by_identity(&key).await? {
        Some(id) => {
            conn.update_institution(id, &record).await?;
            tracing::debug!(%id, %key, source = %record.source, "updated institution");
            Ok(UpsertOutcome::Updated)
        },
        None => {
            let id = conn.insert_institution(&record).await?;
            tracing::debug!(%id, %key, source = %record.source, "created institution");
            Ok(UpsertOutcome::Created)
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use instsync_storage::{ConnectionSource, MemoryStore};

    use super::*;

    fn record(website: &str) -> InstitutionRecord {
        InstitutionRecord::builder("Polytechnic University of the Philippines", "NCR", "Metro Manila", "CHED")
            .institution_type("University")
            .website(website)
            .build()
    }

    #[tokio::test]
    async fn first_upsert_creates_row_with_id() {
        let store = MemoryStore::new();
        let mut conn = store.acquire().await.unwrap();

        let outcome = upsert_institution(&mut conn, record("https://pup.edu.ph")).await.unwrap();
        assert_eq!(outcome, UpsertOutcome::Created);

        let key = record("").identity();
        let id = conn.find_id_by_identity(&key).await.unwrap().expect("row should exist");
        let stored = conn.get_institution(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.record.website.as_deref(), Some("https://pup.edu.ph"));
    }

    #[tokio::test]
    async fn second_upsert_updates_same_row() {
        let store = MemoryStore::new();
        let mut conn = store.acquire().await.unwrap();

        upsert_institution(&mut conn, record("https://old.pup.edu.ph")).await.unwrap();
        let id = conn.find_id_by_identity(&record("").identity()).await.unwrap().unwrap();
        let first = conn.get_institution(id).await.unwrap().unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        let outcome = upsert_institution(&mut conn, record("https://pup.edu.ph")).await.unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated);

        assert_eq!(conn.count_institutions().await.unwrap(), 1);
        let second = conn.get_institution(id).await.unwrap().unwrap();
        assert_eq!(second.record.website.as_deref(), Some("https://pup.edu.ph"));
        assert!(second.updated_at > first.updated_at);
        assert_eq!(second.created_at, first.created_at);
    }

    #[tokio::test]
    async fn missing_logo_is_generated() {
        let store = MemoryStore::new();
        let mut conn = store.acquire().await.unwrap();
        upsert_institution(&mut conn, record("https://pup.edu.ph")).await.unwrap();

        let rows = store.snapshot().await;
        assert_eq!(
            rows[0].record.logo_url.as_deref(),
            Some("https://ui-avatars.com/api/?name=PUO&size=200&background=0D47A1&color=fff&format=png")
        );
    }

    #[tokio::test]
    async fn provided_logo_is_kept() {
        let store = MemoryStore::new();
        let mut conn = store.acquire().await.unwrap();
        let mut with_logo = record("https://pup.edu.ph");
        with_logo.logo_url = Some("https://pup.edu.ph/seal.png".to_owned());
        upsert_institution(&mut conn, with_logo).await.unwrap();

        let rows = store.snapshot().await;
        assert_eq!(rows[0].record.logo_url.as_deref(), Some("https://pup.edu.ph/seal.png"));
    }

    #[tokio::test]
    async fn spelling_variant_updates_existing_row_and_keeps_first_name() {
        let store = MemoryStore::new();
        let mut conn = store.acquire().await.unwrap();
        upsert_institution(&mut conn, record("https://pup.edu.ph")).await.unwrap();

        let variant = InstitutionRecord::builder(
            "POLYTECHNIC UNIVERSITY OF THE PHILIPPINES.",
            "NCR",
            "Metro Manila",
            "TESDA",
        )
        .build();
        let outcome = upsert_institution(&mut conn, variant).await.unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated);

        let rows = store.snapshot().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.name, "Polytechnic University of the Philippines");
        assert_eq!(rows[0].record.source, "TESDA");
    }
}
