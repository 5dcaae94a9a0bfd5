//! Sync orchestration: fetch every registry, dedup, then upsert each
//! surviving record over a single storage connection.

use instsync_core::{InstitutionRecord, UpsertOutcome, deduplicate};
use instsync_storage::ConnectionSource;
use serde::Serialize;

use crate::{FetchError, ServiceError, SourceFetcher, upsert_institution};

/// Deduplicated records ready to be written.
#[derive(Debug, Clone)]
pub struct SyncBatch {
    pub records: Vec<InstitutionRecord>,
    /// Records returned by all registries before dedup.
    pub fetched: usize,
}

impl SyncBatch {
    #[must_use]
    pub fn duplicates_dropped(&self) -> usize {
        self.fetched.saturating_sub(self.records.len())
    }
}

/// Tallies of a completed sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub fetched: usize,
    pub duplicates_dropped: usize,
    pub created: usize,
    pub updated: usize,
}

/// Fetch every registry in order and deduplicate the concatenation.
/// The first failing registry aborts the whole collection. Touches no storage.
pub async fn collect_batch(sources: &[Box<dyn SourceFetcher>]) -> Result<SyncBatch, FetchError> {
    let mut all = Vec::new();
    for source in sources {
        let records = source.fetch().await?;
        tracing::info!(source = source.source(), count = records.len(), "fetched registry");
        all.extend(records);
    }
    let fetched = all.len();
    let records = deduplicate(all);
    tracing::info!(fetched, unique = records.len(), "deduplicated institutions");
    Ok(SyncBatch { records, fetched })
}

pub struct InstitutionSync<S> {
    store: S,
    sources: Vec<Box<dyn SourceFetcher>>,
}

impl<S: ConnectionSource> InstitutionSync<S> {
    /// `sources` are fetched in the given order; earlier registries win dedup ties.
    #[must_use]
    pub fn new(store: S, sources: Vec<Box<dyn SourceFetcher>>) -> Self {
        Self { store, sources }
    }

    /// [`collect_batch`] over this sync's sources.
    pub async fn collect(&self) -> Result<SyncBatch, FetchError> {
        collect_batch(&self.sources).await
    }

    /// Upsert every record in `batch` sequentially over one connection.
    ///
    /// Stops at the first storage error. Rows written before the failure
    /// stay committed. The connection is released on every exit path.
    pub async fn apply(&self, batch: SyncBatch) -> Result<SyncReport, ServiceError> {
        let mut report = SyncReport {
            fetched: batch.fetched,
            duplicates_dropped: batch.duplicates_dropped(),
            ..SyncReport::default()
        };
        let mut conn = self.store.acquire().await?;
        for record in batch.records {
            match upsert_institution(&mut conn, record).await? {
                UpsertOutcome::Created => report.created += 1,
                UpsertOutcome::Updated => report.updated += 1,
            }
        }
        tracing::info!(created = report.created, updated = report.updated, "sync completed");
        Ok(report)
    }

    /// Full sync: [`collect`](Self::collect) then [`apply`](Self::apply).
    pub async fn run(&self) -> Result<SyncReport, ServiceError> {
        let batch = self.collect().await?;
        self.apply(batch).await
    }
}
