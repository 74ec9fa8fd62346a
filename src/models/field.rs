//! Tri-state fields for update requests.
//!
//! Webex update calls treat a missing field ("leave as is") differently from
//! an explicit `null` ("clear it"). [`Field`] keeps the two apart:
//!
//! ```
//! use webex_rs::models::Field;
//! use serde::Serialize;
//!
//! #[derive(Serialize, Default)]
//! struct Update {
//!     #[serde(default, skip_serializing_if = "Field::is_unset")]
//!     nickname: Field<String>,
//!     #[serde(default, skip_serializing_if = "Field::is_unset")]
//!     title: Field<String>,
//! }
//!
//! let update = Update { nickname: Field::Null, ..Default::default() };
//! assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"nickname":null}"#);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that is either left alone, cleared, or set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// Not part of the request.
    Unset,
    /// Sent as JSON `null`.
    Null,
    /// Sent with this value.
    Value(T),
}

impl<T> Field<T> {
    /// Returns `true` if the field is not part of the request.
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    /// Returns `true` if the field is explicitly `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Returns `true` if the field carries a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Field::Value(_))
    }

    /// Borrow the value, if any.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Take the value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Set from an option: `None` becomes an explicit `null`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }

    /// Map the contained value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(f(v)),
        }
    }
}

// Manual impl so `T` needs no `Default`.
impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => serializer.serialize_some(v),
            Field::Unset | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    /// A present `null` decodes to [`Field::Null`]; combine with
    /// `#[serde(default)]` so a missing key stays [`Field::Unset`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Field::from_option(Option::<T>::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Patch {
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        display_name: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        extension: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        capacity: Field<u32>,
    }

    #[test]
    fn test_only_set_fields_serialize() {
        let patch = Patch {
            display_name: "Lobby".to_string().into(),
            extension: Field::Null,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "displayName": "Lobby", "extension": null })
        );
    }

    #[test]
    fn test_empty_patch_is_empty_object() {
        assert_eq!(serde_json::to_value(Patch::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_deserialize_distinguishes_missing_and_null() {
        let patch: Patch = serde_json::from_value(json!({ "extension": null, "capacity": 4 }))
            .unwrap();
        assert!(patch.display_name.is_unset());
        assert!(patch.extension.is_null());
        assert_eq!(patch.capacity, Field::Value(4));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(Field::from_option(None::<u8>), Field::Null);
        assert_eq!(Field::Value(2).map(|v| v * 2).into_option(), Some(4));
        assert_eq!(Field::<u8>::Unset.as_ref(), None);
    }
}
