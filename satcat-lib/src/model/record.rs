//! Satellite catalog record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use super::ObjectType;

/// One tracked-object entry returned by the search service.
///
/// Records are immutable after fetch; filtering and sorting produce new
/// views rather than mutating the source set. Beyond the fields the library
/// understands, every additional descriptive field the service sends is
/// passed through unchanged in [`SatelliteRecord::extra`].
///
/// # Example
///
/// ```
/// use satcat_lib::model::ObjectType;
/// use satcat_lib::model::SatelliteRecord;
///
/// let record: SatelliteRecord = serde_json::from_str(
///     r#"{"id":1,"name":"Alpha","noradCatId":"100","objectType":"PAYLOAD","orbitalCode":"LEO"}"#,
/// ).unwrap();
///
/// assert_eq!(record.id, "1");
/// assert_eq!(record.object_type, ObjectType::Payload);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteRecord {
    /// Unique identifier. The wire may carry it as a number or a string.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Display name of the tracked object.
    pub name: String,

    /// NORAD catalog number as a numeric-looking string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub norad_cat_id: String,

    /// Coarse classification, one filter dimension.
    #[serde(default)]
    pub object_type: ObjectType,

    /// Orbit-regime classification, the second filter dimension.
    #[serde(default)]
    pub orbital_code: String,

    /// Additional descriptive fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl SatelliteRecord {
    /// Creates a new record with the fields the library understands.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        norad_cat_id: impl Into<String>,
        object_type: ObjectType,
        orbital_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            norad_cat_id: norad_cat_id.into(),
            object_type,
            orbital_code: orbital_code.into(),
            extra: HashMap::new(),
        }
    }
}

/// Accepts a JSON string or number and yields its string form.
///
/// The search service is not consistent about whether identifiers are
/// numbers or strings.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    use serde::de::Error as _;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_identifiers() {
        let record: SatelliteRecord = serde_json::from_str(
            r#"{"id":42,"name":"Zarya","noradCatId":25544,"objectType":"PAYLOAD","orbitalCode":"LEO"}"#,
        )
        .unwrap();

        assert_eq!(record.id, "42");
        assert_eq!(record.norad_cat_id, "25544");
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let record: SatelliteRecord = serde_json::from_str(
            r#"{"id":"1","name":"Alpha","noradCatId":"100","objectType":"DEBRIS","orbitalCode":"GEO","intlDes":"1998-067A","launchDate":"1998-11-20"}"#,
        )
        .unwrap();

        assert_eq!(
            record.extra.get("intlDes"),
            Some(&serde_json::Value::String("1998-067A".to_string()))
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["launchDate"], "1998-11-20");
        assert_eq!(json["noradCatId"], "100");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let record: SatelliteRecord =
            serde_json::from_str(r#"{"id":"7","name":"Object 7"}"#).unwrap();

        assert_eq!(record.norad_cat_id, "");
        assert_eq!(record.object_type, ObjectType::Unknown);
        assert_eq!(record.orbital_code, "");
    }
}
