//! Free-text search criteria

use serde::Deserialize;
use serde::Serialize;

use crate::model::SatelliteRecord;

/// Prefix-match search over the record set.
///
/// A record matches when every non-empty criterion is a prefix of the
/// corresponding field: the name comparison is case-insensitive, the
/// catalog-number comparison is case-sensitive. Both criteria are trimmed
/// before comparison, so stray whitespace in an input box never changes the
/// result.
///
/// # Example
///
/// ```
/// use satcat_lib::model::ObjectType;
/// use satcat_lib::model::SatelliteRecord;
/// use satcat_lib::query::SearchCriteria;
///
/// let record = SatelliteRecord::new("1", "Alpha", "100", ObjectType::Payload, "LEO");
/// assert!(SearchCriteria::new().with_name("al").matches(&record));
/// assert!(!SearchCriteria::new().with_name("beta").matches(&record));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Name prefix, matched case-insensitively.
    pub name: String,
    /// NORAD catalog number prefix, matched case-sensitively.
    pub norad_cat_id: String,
}

impl SearchCriteria {
    /// Creates empty criteria, which match every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name prefix.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the catalog-number prefix.
    pub fn with_norad_cat_id(mut self, norad_cat_id: impl Into<String>) -> Self {
        self.norad_cat_id = norad_cat_id.into();
        self
    }

    /// Returns `true` if both criteria are blank after trimming.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.norad_cat_id.trim().is_empty()
    }

    /// Returns `true` if the record satisfies every non-empty criterion.
    pub fn matches(&self, record: &SatelliteRecord) -> bool {
        let name = self.name.trim().to_lowercase();
        let norad = self.norad_cat_id.trim();

        let name_matches = name.is_empty() || record.name.to_lowercase().starts_with(&name);
        let norad_matches = norad.is_empty() || record.norad_cat_id.starts_with(norad);

        name_matches && norad_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ObjectType;

    fn record(name: &str, norad: &str) -> SatelliteRecord {
        SatelliteRecord::new("1", name, norad, ObjectType::Payload, "LEO")
    }

    #[test]
    fn test_name_prefix_is_case_insensitive() {
        let criteria = SearchCriteria::new().with_name("ISS");
        assert!(criteria.matches(&record("iss (zarya)", "25544")));
        assert!(!criteria.matches(&record("Starlink-1", "44713")));
    }

    #[test]
    fn test_name_is_prefix_not_substring() {
        let criteria = SearchCriteria::new().with_name("link");
        assert!(!criteria.matches(&record("Starlink-1", "44713")));
    }

    #[test]
    fn test_catalog_number_prefix_is_case_sensitive() {
        let criteria = SearchCriteria::new().with_norad_cat_id("25");
        assert!(criteria.matches(&record("ISS", "25544")));
        assert!(!criteria.matches(&record("Alpha", "100")));

        // No case folding on the catalog dimension.
        let criteria = SearchCriteria::new().with_norad_cat_id("a1");
        assert!(!criteria.matches(&record("Alpha", "A100")));
        assert!(criteria.matches(&record("Alpha", "a100")));
    }

    #[test]
    fn test_both_criteria_are_trimmed() {
        let criteria = SearchCriteria::new()
            .with_name("  alp  ")
            .with_norad_cat_id(" 10 ");
        assert!(criteria.matches(&record("Alpha", "100")));
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = SearchCriteria::new().with_name("   ");
        assert!(criteria.is_empty());
        assert!(criteria.matches(&record("Anything", "999")));
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let criteria = SearchCriteria::new().with_name("al").with_norad_cat_id("2");
        assert!(!criteria.matches(&record("Alpha", "100")));
        assert!(criteria.matches(&record("Alpha", "200")));
    }
}
