//! Builder for [`InstitutionRecord`].

use chrono::{DateTime, Utc};

use super::{InstitutionRecord, Ownership};

/// Builder for constructing [`InstitutionRecord`] instances.
#[derive(Debug, Clone)]
pub struct InstitutionRecordBuilder {
    name: String,
    region: String,
    province: String,
    source: String,
    alt_names: Vec<String>,
    institution_type: String,
    ownership: Ownership,
    city_municipality: String,
    address: Option<String>,
    website: Option<String>,
    email: Option<String>,
    logo_url: Option<String>,
    source_url: Option<String>,
    source_date: Option<DateTime<Utc>>,
}

impl InstitutionRecordBuilder {
    #[must_use]
    pub(super) fn new(name: String, region: String, province: String, source: String) -> Self {
        Self {
            name,
            region,
            province,
            source,
            alt_names: Vec::new(),
            institution_type: "College".to_owned(),
            ownership: Ownership::default(),
            city_municipality: String::new(),
            address: None,
            website: None,
            email: None,
            logo_url: None,
            source_url: None,
            source_date: None,
        }
    }

    #[must_use]
    pub fn alt_names<I, S>(mut self, alt_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alt_names = alt_names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn institution_type(mut self, institution_type: impl Into<String>) -> Self {
        self.institution_type = institution_type.into();
        self
    }

    #[must_use]
    pub fn ownership(mut self, ownership: impl Into<Ownership>) -> Self {
        self.ownership = ownership.into();
        self
    }

    #[must_use]
    pub fn city_municipality(mut self, city_municipality: impl Into<String>) -> Self {
        self.city_municipality = city_municipality.into();
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    #[must_use]
    pub fn source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    #[must_use]
    pub fn source_date(mut self, source_date: DateTime<Utc>) -> Self {
        self.source_date = Some(source_date);
        self
    }

    #[must_use]
    pub fn build(self) -> InstitutionRecord {
        InstitutionRecord {
            name: self.name,
            alt_names: self.alt_names,
            institution_type: self.institution_type,
            ownership: self.ownership,
            region: self.region,
            province: self.province,
            city_municipality: self.city_municipality,
            address: self.address,
            website: self.website,
            email: self.email,
            logo_url: self.logo_url,
            source: self.source,
            source_url: self.source_url,
            source_date: self.source_date,
        }
    }
}
