//! Tests for `deduplicate`.

#[cfg(test)]
mod tests {
    use crate::{InstitutionRecord, deduplicate};

    fn record(name: &str, region: &str, province: &str, source: &str) -> InstitutionRecord {
        InstitutionRecord::builder(name, region, province, source).build()
    }

    fn names(records: &[InstitutionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn case_and_punctuation_variants_collapse_to_first() {
        let input = vec![
            record("University of the Philippines", "NCR", "Metro Manila", "CHED"),
            record("university of the philippines.", "NCR", "Metro Manila", "TESDA"),
        ];
        let out = deduplicate(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "University of the Philippines");
        assert_eq!(out[0].source, "CHED");
    }

    #[test]
    fn distinct_keys_keep_input_order() {
        let input = vec![
            record("Mapua University", "NCR", "Metro Manila", "CHED"),
            record("Ateneo de Manila University", "NCR", "Metro Manila", "CHED"),
            record("TESDA Technology Institute", "NCR", "Metro Manila", "TESDA"),
        ];
        let out = deduplicate(input);
        assert_eq!(
            names(&out),
            vec!["Mapua University", "Ateneo de Manila University", "TESDA Technology Institute"]
        );
    }

    #[test]
    fn same_name_in_different_province_is_kept() {
        let input = vec![
            record("Saint Louis College", "Region I", "La Union", "CHED"),
            record("Saint Louis College", "Region I", "Ilocos Sur", "CHED"),
        ];
        assert_eq!(deduplicate(input).len(), 2);
    }

    #[test]
    fn later_duplicate_fields_are_not_merged() {
        let first = InstitutionRecord::builder("Far Eastern University", "NCR", "Metro Manila", "CHED").build();
        let second = InstitutionRecord::builder("FAR EASTERN UNIVERSITY", "NCR", "Metro Manila", "TESDA")
            .website("https://feu.edu.ph")
            .alt_names(["FEU"])
            .build();
        let out = deduplicate(vec![first, second]);
        assert_eq!(out.len(), 1);
        assert!(out[0].website.is_none());
        assert!(out[0].alt_names.is_empty());
    }

    #[test]
    fn interleaved_duplicates_preserve_first_positions() {
        let input = vec![
            record("A College", "R", "P", "CHED"),
            record("B College", "R", "P", "CHED"),
            record("a college", "R", "P", "TESDA"),
            record("C College", "R", "P", "TESDA"),
            record("B  College", "R", "P", "TESDA"),
        ];
        let out = deduplicate(input);
        // "B  College" keeps its double space after normalization, so it is distinct.
        assert_eq!(names(&out), vec!["A College", "B College", "C College", "B  College"]);
    }

    #[test]
    fn empty_input() {
        assert!(deduplicate(Vec::new()).is_empty());
    }

    #[test]
    fn hyphen_placement_in_location_shares_a_key() {
        let input = vec![
            record("A College", "Region-1", "P", "CHED"),
            record("A College", "Region", "1-P", "TESDA"),
        ];
        let out = deduplicate(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].region, "Region-1");
        assert_eq!(out[0].source, "CHED");
    }
}
