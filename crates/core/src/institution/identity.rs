use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize_name;

/// Identity of an institution: normalized name plus raw region and province.
///
/// Used both to collapse duplicates across registries and to find the
/// stored row an incoming record should update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityKey {
    pub name_key: String,
    pub region: String,
    pub province: String,
}

impl IdentityKey {
    #[must_use]
    pub fn new(name: &str, region: &str, province: &str) -> Self {
        Self { name_key: normalize_name(name), region: region.to_owned(), province: province.to_owned() }
    }
}

/// Renders the dedup key, `name_key-region-province`.
impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.name_key, self.region, self.province)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_with_dashes() {
        let key = IdentityKey::new("University of the Philippines", "NCR", "Metro Manila");
        assert_eq!(key.to_string(), "university of the philippines-NCR-Metro Manila");
    }

    #[test]
    fn region_and_province_are_not_normalized() {
        let a = IdentityKey::new("Saint Louis University", "CAR", "Benguet");
        let b = IdentityKey::new("Saint Louis University", "car", "Benguet");
        assert_ne!(a, b);
    }
}
