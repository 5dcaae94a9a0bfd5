//! PostgreSQL storage backend using sqlx.

mod institutions;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use instsync_core::{InstitutionRecord, Ownership, PG_POOL_IDLE_TIMEOUT_SECS, StoredInstitution, SyncConfig};
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, Row};

use crate::error::StorageError;
use crate::pg_schema::ensure_schema;
use crate::traits::ConnectionSource;

pub(crate) const INSTITUTION_COLUMNS: &str =
    r#"id, name, alt_names, "type", ownership, region, province, city_municipality,
       address, website, email, logo_url, source, source_url, source_date,
       created_at, updated_at"#;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect using the pool settings in `config` and make sure the
    /// `institutions` table exists.
    pub async fn connect(config: &SyncConfig) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(&config.database_url)
            .await?;
        ensure_schema(&pool).await?;
        tracing::info!(max_connections = config.max_connections, "PgStorage initialized");
        Ok(Self { pool })
    }

    /// Close the pool, waiting for checked-out connections to come back.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// One checked-out pool connection. Returned to the pool on drop.
#[derive(Debug)]
pub struct PgInstitutionConnection {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl ConnectionSource for PgStorage {
    type Connection = PgInstitutionConnection;

    async fn acquire(&self) -> Result<Self::Connection, StorageError> {
        let conn = self.pool.acquire().await?;
        tracing::debug!("acquired database connection");
        Ok(PgInstitutionConnection { conn })
    }
}

pub(crate) fn row_to_institution(row: &PgRow) -> Result<StoredInstitution, StorageError> {
    let ownership: String = row.try_get("ownership")?;
    let source_date: Option<DateTime<Utc>> = row.try_get("source_date")?;
    let record = InstitutionRecord {
        name: row.try_get("name")?,
        alt_names: row.try_get("alt_names")?,
        institution_type: row.try_get("type")?,
        ownership: Ownership::from(ownership),
        region: row.try_get("region")?,
        province: row.try_get("province")?,
        city_municipality: row.try_get("city_municipality")?,
        address: row.try_get("address")?,
        website: row.try_get("website")?,
        email: row.try_get("email")?,
        logo_url: row.try_get("logo_url")?,
        source: row.try_get("source")?,
        source_url: row.try_get("source_url")?,
        source_date,
    };
    Ok(StoredInstitution {
        id: row.try_get("id")?,
        record,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
