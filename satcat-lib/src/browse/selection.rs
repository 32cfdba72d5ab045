//! Bounded multi-selection

use crate::error::SelectionError;
use crate::model::SatelliteRecord;

/// Default maximum number of selected records.
pub const SELECTION_LIMIT: usize = 10;

/// One selected record with the display position it was toggled at.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEntry {
    /// The selected record.
    pub record: SatelliteRecord,
    /// Position within the displayed subset at toggle time.
    ///
    /// Only a rendering anchor: record identity is the key, and positions
    /// go stale as soon as the displayed subset is re-derived. Use
    /// projection against the current subset for rendering.
    pub position: usize,
}

/// What a toggle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The record was added to the selection.
    Added,
    /// The record was removed from the selection.
    Removed,
}

/// An ordered, bounded collection of distinct selected records.
///
/// Invariants: at most `limit` entries; no record id appears twice; removal
/// is id-matched; an addition attempt at the cap is rejected with
/// [`SelectionError::LimitExceeded`] and no state change. The set remembers
/// the last limit error so a UI can surface it inline; any successful
/// toggle clears it.
#[derive(Debug, Clone)]
pub struct SelectionSet {
    entries: Vec<SelectionEntry>,
    limit: usize,
    last_error: Option<SelectionError>,
}

impl SelectionSet {
    /// Creates an empty selection bounded by [`SELECTION_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(SELECTION_LIMIT)
    }

    /// Creates an empty selection with a custom bound.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
            last_error: None,
        }
    }

    /// Toggles a record in or out of the selection.
    ///
    /// A record already present (by id) is removed regardless of the
    /// position it was originally toggled at. Otherwise the record is
    /// appended, unless the selection is at capacity.
    pub fn toggle(
        &mut self,
        record: &SatelliteRecord,
        position: usize,
    ) -> Result<SelectionChange, SelectionError> {
        if let Some(index) = self.entries.iter().position(|e| e.record.id == record.id) {
            self.entries.remove(index);
            self.last_error = None;
            return Ok(SelectionChange::Removed);
        }

        if self.entries.len() >= self.limit {
            let err = SelectionError::LimitExceeded { limit: self.limit };
            self.last_error = Some(err.clone());
            return Err(err);
        }

        self.entries.push(SelectionEntry {
            record: record.clone(),
            position,
        });
        self.last_error = None;
        Ok(SelectionChange::Added)
    }

    /// Returns `true` if a record with the given id is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.record.id == id)
    }

    /// Returns the selected records in selection order.
    pub fn records(&self) -> impl Iterator<Item = &SatelliteRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Returns the selection entries in selection order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Returns the number of selected records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the selection capacity.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the last limit error, if the most recent rejected toggle has
    /// not been followed by a successful one.
    pub fn error(&self) -> Option<&SelectionError> {
        self.last_error.as_ref()
    }

    /// Removes every entry and clears any remembered error.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_error = None;
    }
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new()
    }
}
