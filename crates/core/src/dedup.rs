//! Cross-registry deduplication of candidate records.

use std::collections::HashSet;

use crate::InstitutionRecord;

/// Keeps the first record seen for each dedup key, preserving encounter
/// order. Later duplicates are dropped without merging any of their fields,
/// so the registry fetched first wins.
///
/// The key is the rendered [`IdentityKey`](crate::IdentityKey) string
/// `normalized-name-region-province`. Region and province are joined with
/// `-` as-is, so two records whose location parts only differ in where a
/// hyphen falls share a key and collapse.
#[must_use]
pub fn deduplicate(records: Vec<InstitutionRecord>) -> Vec<InstitutionRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut result = Vec::with_capacity(records.len());
    for record in records {
        let key = record.identity().to_string();
        if seen.contains(&key) {
            tracing::debug!(
                name = %record.name,
                source = %record.source,
                %key,
                "dropping duplicate institution"
            );
            continue;
        }
        seen.insert(key);
        result.push(record);
    }
    result
}
