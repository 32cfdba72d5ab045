//! Multi-value filter criteria

use serde::Deserialize;
use serde::Serialize;

use crate::model::ObjectType;
use crate::model::SatelliteRecord;

/// Set-membership filter over two independent dimensions.
///
/// An empty dimension places no constraint. A record matches when it
/// satisfies every non-empty dimension, which is the same result as
/// restricting by object type first and orbital code second.
///
/// # Example
///
/// ```
/// use satcat_lib::model::ObjectType;
/// use satcat_lib::query::FilterCriteria;
///
/// let criteria = FilterCriteria::new()
///     .with_object_types([ObjectType::Debris])
///     .with_orbital_codes(["GEO"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected object types; empty means unconstrained.
    pub object_types: Vec<ObjectType>,
    /// Selected orbital codes; empty means unconstrained.
    pub orbital_codes: Vec<String>,
}

impl FilterCriteria {
    /// Creates criteria with both dimensions unconstrained.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the object-type dimension.
    pub fn with_object_types(mut self, types: impl IntoIterator<Item = ObjectType>) -> Self {
        self.object_types = types.into_iter().collect();
        self
    }

    /// Sets the orbital-code dimension.
    pub fn with_orbital_codes<S: Into<String>>(
        mut self,
        codes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.orbital_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if both dimensions are unconstrained.
    pub fn is_empty(&self) -> bool {
        self.object_types.is_empty() && self.orbital_codes.is_empty()
    }

    /// Returns `true` if the record satisfies every non-empty dimension.
    pub fn matches(&self, record: &SatelliteRecord) -> bool {
        let type_matches =
            self.object_types.is_empty() || self.object_types.contains(&record.object_type);
        let code_matches = self.orbital_codes.is_empty()
            || self.orbital_codes.iter().any(|c| *c == record.orbital_code);

        type_matches && code_matches
    }
}
