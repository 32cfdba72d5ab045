//! Active derivation predicate

use serde::Deserialize;
use serde::Serialize;

use super::FilterCriteria;
use super::SearchCriteria;
use crate::model::SatelliteRecord;

/// The single predicate currently deriving the displayed subset.
///
/// Search and filter are mutually overriding, not composable: applying one
/// replaces the other, and each derivation runs against the full record set.
/// The tag records which operation was invoked last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ActivePredicate {
    /// No constraint; the displayed subset is the full set.
    #[default]
    None,
    /// A text search is in effect.
    Search(SearchCriteria),
    /// A multi-value filter is in effect.
    Filter(FilterCriteria),
}

impl ActivePredicate {
    /// Returns `true` if the record satisfies the predicate.
    pub fn matches(&self, record: &SatelliteRecord) -> bool {
        match self {
            Self::None => true,
            Self::Search(criteria) => criteria.matches(record),
            Self::Filter(criteria) => criteria.matches(record),
        }
    }

    /// Derives a new subset from the full record set.
    pub fn apply(&self, records: &[SatelliteRecord]) -> Vec<SatelliteRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
