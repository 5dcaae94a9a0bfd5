//! Idempotent bootstrap of the `institutions` table.
//!
//! Only `CREATE ... IF NOT EXISTS`; there is no versioning and nothing is
//! ever altered or dropped.

use sqlx::PgPool;

use crate::error::StorageError;

const CREATE_INSTITUTIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS institutions (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        name_key TEXT NOT NULL,
        alt_names TEXT[] NOT NULL DEFAULT '{}',
        "type" TEXT NOT NULL,
        ownership TEXT NOT NULL,
        region TEXT NOT NULL,
        province TEXT NOT NULL,
        city_municipality TEXT NOT NULL,
        address TEXT,
        website TEXT,
        email TEXT,
        logo_url TEXT,
        source TEXT NOT NULL,
        source_url TEXT,
        source_date TIMESTAMPTZ,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_IDENTITY_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS idx_institutions_identity
     ON institutions (name_key, region, province)";

/// Create the `institutions` table and its identity index if missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StorageError> {
    for statement in [CREATE_INSTITUTIONS, CREATE_IDENTITY_INDEX] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Schema(e.to_string()))?;
    }
    tracing::debug!("institutions schema ready");
    Ok(())
}
