//! Registry fetchers.
//!
//! No registry is queried over the network yet; [`StaticRegistry`] serves a
//! fixed list per registry, stamped with provenance at fetch time.

use async_trait::async_trait;
use chrono::Utc;
use instsync_core::{InstitutionRecord, Ownership};

use crate::FetchError;

/// Produces candidate records from one registry.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Registry tag written to each record's `source`.
    fn source(&self) -> &str;

    /// Every record the registry currently lists, tagged with `source`,
    /// `source_url` and `source_date`.
    async fn fetch(&self) -> Result<Vec<InstitutionRecord>, FetchError>;
}

/// Registry backed by an in-memory list.
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    source: String,
    source_url: String,
    entries: Vec<InstitutionRecord>,
}

impl StaticRegistry {
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        source_url: impl Into<String>,
        entries: Vec<InstitutionRecord>,
    ) -> Self {
        Self { source: source.into(), source_url: source_url.into(), entries }
    }
}

#[async_trait]
impl SourceFetcher for StaticRegistry {
    fn source(&self) -> &str {
        &self.source
    }

    async fn fetch(&self) -> Result<Vec<InstitutionRecord>, FetchError> {
        let fetched_at = Utc::now();
        let records = self
            .entries
            .iter()
            .cloned()
            .map(|mut record| {
                record.source.clone_from(&self.source);
                if record.source_url.is_none() {
                    record.source_url = Some(self.source_url.clone());
                }
                record.source_date = Some(fetched_at);
                record
            })
            .collect();
        Ok(records)
    }
}

/// Commission on Higher Education HEI list.
#[must_use]
pub fn ched_registry() -> StaticRegistry {
    const SOURCE: &str = "CHED";
    StaticRegistry::new(
        SOURCE,
        "https://ched.gov.ph/hei-list",
        vec![
            InstitutionRecord::builder("University of the Philippines", "NCR", "Metro Manila", SOURCE)
                .alt_names(["UP"])
                .institution_type("University")
                .ownership(Ownership::Public)
                .city_municipality("Quezon City")
                .address("Diliman, Quezon City")
                .website("https://up.edu.ph")
                .email("info@up.edu.ph")
                .build(),
            InstitutionRecord::builder("De La Salle University", "NCR", "Metro Manila", SOURCE)
                .alt_names(["DLSU"])
                .institution_type("University")
                .ownership(Ownership::Private)
                .city_municipality("Manila")
                .address("2401 Taft Avenue, Manila")
                .website("https://dlsu.edu.ph")
                .build(),
        ],
    )
}

/// Technical Education and Skills Development Authority TVI list.
#[must_use]
pub fn tesda_registry() -> StaticRegistry {
    const SOURCE: &str = "TESDA";
    StaticRegistry::new(
        SOURCE,
        "https://tesda.gov.ph/tvi-list",
        vec![
            InstitutionRecord::builder("TESDA Technology Institute", "NCR", "Metro Manila", SOURCE)
                .alt_names(["TTI"])
                .institution_type("Institute")
                .ownership(Ownership::Public)
                .city_municipality("Taguig City")
                .address("East Service Road, Taguig City")
                .website("https://tesda.gov.ph")
                .build(),
        ],
    )
}

/// Registries in fetch order. Order decides which record survives dedup.
#[must_use]
pub fn default_sources() -> Vec<Box<dyn SourceFetcher>> {
    vec![Box::new(ched_registry()), Box::new(tesda_registry())]
}
