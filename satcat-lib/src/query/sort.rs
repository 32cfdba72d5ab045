//! Ordering of the displayed subset

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::SatelliteRecord;

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// Field a sort criterion orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// Case-insensitive ordering by display name.
    Name,
    /// Numeric ordering by catalog number, falling back to lexicographic
    /// when a value does not parse.
    NoradCatId,
}

/// A field/direction pair ordering the displayed subset.
///
/// The sort is stable: records that compare equal keep their relative
/// order from the previous derivation.
///
/// # Example
///
/// ```
/// use satcat_lib::query::SortCriterion;
/// use satcat_lib::query::SortField;
///
/// let by_name = SortCriterion::default();
/// let by_number = SortCriterion::desc(SortField::NoradCatId);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    /// The field to order by.
    pub field: SortField,
    /// The direction to order in.
    pub direction: Direction,
}

impl SortCriterion {
    /// Creates an ascending criterion on a field.
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    /// Creates a descending criterion on a field.
    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }

    /// Compares two records under this criterion.
    pub fn compare(&self, a: &SatelliteRecord, b: &SatelliteRecord) -> Ordering {
        let ordering = match self.field {
            SortField::Name => compare_names(&a.name, &b.name),
            SortField::NoradCatId => compare_catalog_numbers(&a.norad_cat_id, &b.norad_cat_id),
        };

        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    /// Sorts records in place under this criterion.
    pub fn sort(&self, records: &mut [SatelliteRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for SortCriterion {
    /// Name ascending, the ordering applied to a freshly fetched catalog.
    fn default() -> Self {
        Self::asc(SortField::Name)
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare_catalog_numbers(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<u64>(), b.trim().parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}
