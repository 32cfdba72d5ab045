//! Object type classification

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// Coarse classification of a tracked object, used as one filter dimension.
///
/// The catalog uses a small set of well-known classifications; anything else
/// coming over the wire is preserved losslessly in [`ObjectType::Other`].
///
/// # Example
///
/// ```
/// use satcat_lib::model::ObjectType;
///
/// assert_eq!(ObjectType::from("PAYLOAD"), ObjectType::Payload);
/// assert_eq!(ObjectType::RocketBody.as_str(), "ROCKET BODY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ObjectType {
    /// An operational or defunct satellite.
    Payload,
    /// Fragmentation or mission-related debris.
    Debris,
    /// A spent upper stage or booster.
    RocketBody,
    /// Classification not determined.
    #[default]
    Unknown,
    /// A classification outside the well-known set, kept verbatim.
    Other(String),
}

/// The classifications the catalog is known to use.
pub const KNOWN_OBJECT_TYPES: [ObjectType; 4] = [
    ObjectType::Payload,
    ObjectType::Debris,
    ObjectType::RocketBody,
    ObjectType::Unknown,
];

impl ObjectType {
    /// Returns the canonical wire string for this classification.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Payload => "PAYLOAD",
            Self::Debris => "DEBRIS",
            Self::RocketBody => "ROCKET BODY",
            Self::Unknown => "UNKNOWN",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ObjectType {
    fn from(s: &str) -> Self {
        match s {
            "PAYLOAD" => Self::Payload,
            "DEBRIS" => Self::Debris,
            "ROCKET BODY" => Self::RocketBody,
            "UNKNOWN" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ObjectType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for ObjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ObjectType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
