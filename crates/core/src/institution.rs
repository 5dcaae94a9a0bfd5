//! Institution records as fetched from registries and as stored.

mod builder;
mod identity;
mod ownership;

pub use builder::InstitutionRecordBuilder;
pub use identity::IdentityKey;
pub use ownership::Ownership;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Candidate record produced by a registry fetcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionRecord {
    /// Display name as published by the registry
    pub name: String,
    /// Alternate names and acronyms, in registry order
    pub alt_names: Vec<String>,
    /// Category label (University, College, Institute, ...)
    #[serde(rename = "type")]
    pub institution_type: String,
    pub ownership: Ownership,
    pub region: String,
    pub province: String,
    pub city_municipality: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    /// Generated from the initials of `name` when absent at upsert time
    pub logo_url: Option<String>,
    /// Registry tag, e.g. `CHED`
    pub source: String,
    /// Page the record was taken from
    pub source_url: Option<String>,
    /// When the record was fetched
    pub source_date: Option<DateTime<Utc>>,
}

impl InstitutionRecord {
    /// Returns a new builder with the required fields set.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        region: impl Into<String>,
        province: impl Into<String>,
        source: impl Into<String>,
    ) -> InstitutionRecordBuilder {
        InstitutionRecordBuilder::new(name.into(), region.into(), province.into(), source.into())
    }

    /// Canonical identity shared by dedup and storage lookup.
    #[must_use]
    pub fn identity(&self) -> IdentityKey {
        IdentityKey::new(&self.name, &self.region, &self.province)
    }
}

/// Row read back from the `institutions` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredInstitution {
    pub id: Uuid,
    #[serde(flatten)]
    pub record: InstitutionRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Which write an upsert performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    Created,
    Updated,
}

impl UpsertOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}
