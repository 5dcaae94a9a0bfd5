//! InstitutionStore implementation for a checked-out PostgreSQL connection.

use async_trait::async_trait;
use instsync_core::{IdentityKey, InstitutionRecord, StoredInstitution};
use uuid::Uuid;

use super::{INSTITUTION_COLUMNS, PgInstitutionConnection, row_to_institution};
use crate::error::StorageError;
use crate::traits::InstitutionStore;

#[async_trait]
impl InstitutionStore for PgInstitutionConnection {
    async fn find_id_by_identity(&mut self, key: &IdentityKey) -> Result<Option<Uuid>, StorageError> {
        let id: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM institutions
             WHERE name_key = $1 AND region = $2 AND province = $3",
        )
        .bind(&key.name_key)
        .bind(&key.region)
        .bind(&key.province)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(id)
    }

    async fn insert_institution(&mut self, record: &InstitutionRecord) -> Result<Uuid, StorageError> {
        let key = record.identity();
        let id: Uuid = sqlx::query_scalar(
            r#"INSERT INTO institutions
               (name, name_key, alt_names, "type", ownership, region, province,
                city_municipality, address, website, email, logo_url,
                source, source_url, source_date)
               VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13,$14,$15)
               RETURNING id"#,
        )
        .bind(&record.name)
        .bind(&key.name_key)
        .bind(&record.alt_names)
        .bind(&record.institution_type)
        .bind(record.ownership.as_str())
        .bind(&record.region)
        .bind(&record.province)
        .bind(&record.city_municipality)
        .bind(&record.address)
        .bind(&record.website)
        .bind(&record.email)
        .bind(&record.logo_url)
        .bind(&record.source)
        .bind(&record.source_url)
        .bind(record.source_date)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(id)
    }

    async fn update_institution(
        &mut self,
        id: Uuid,
        record: &InstitutionRecord,
    ) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"UPDATE institutions SET
                 alt_names = $1, "type" = $2, ownership = $3,
                 city_municipality = $4, address = $5, website = $6,
                 email = $7, logo_url = $8, source = $9, source_url = $10,
                 source_date = $11, updated_at = NOW()
               WHERE id = $12"#,
        )
        .bind(&record.alt_names)
        .bind(&record.institution_type)
        .bind(record.ownership.as_str())
        .bind(&record.city_municipality)
        .bind(&record.address)
        .bind(&record.website)
        .bind(&record.email)
        .bind(&record.logo_url)
        .bind(&record.source)
        .bind(&record.source_url)
        .bind(record.source_date)
        .bind(id)
        .execute(&mut *self.conn)
        .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound { entity: "institution", id: id.to_string() });
        }
        Ok(())
    }

    async fn get_institution(&mut self, id: Uuid) -> Result<Option<StoredInstitution>, StorageError> {
        let row = sqlx::query(&format!("SELECT {INSTITUTION_COLUMNS} FROM institutions WHERE id = $1"))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        row.map(|r| row_to_institution(&r)).transpose()
    }

    async fn count_institutions(&mut self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM institutions")
            .fetch_one(&mut *self.conn)
            .await?;
        u64::try_from(count).map_err(|e| StorageError::DataCorruption {
            context: "negative row count".into(),
            source: Box::new(e),
        })
    }
}
