//! Expected and observed body values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A request or response body whose shape is not known up front.
///
/// On the wire a body is any JSON value. `null` and a missing field both
/// decode to [`Body::Absent`]; anything else decodes to [`Body::Json`].
/// [`Body::Text`] holds raw observed text and is written back out as a
/// JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Body {
    /// No body was given.
    #[default]
    Absent,
    /// A decoded JSON value.
    Json(Value),
    /// Raw text that is not JSON.
    Text(String),
}

impl Body {
    /// Returns true if no body was given.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the JSON value, if this is a JSON body.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            other => Self::Json(other),
        }
    }
}

impl Serialize for Body {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Json(value) => value.serialize(serializer),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for Body {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.map_or(Self::Absent, Self::Json))
    }
}
