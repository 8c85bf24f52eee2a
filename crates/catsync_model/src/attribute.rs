//! Custom attributes and their natural keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A custom attribute on a product or variant.
///
/// Attribute values are free-form JSON; the engine compares them
/// structurally and treats JSON `null` as the absent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Locale scope for localized attributes, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// The attribute value.
    #[serde(default)]
    pub value: Value,
}

impl Attribute {
    /// Creates an unlocalized attribute.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            locale: None,
            value,
        }
    }

    /// Creates a locale-scoped attribute.
    pub fn localized(name: impl Into<String>, locale: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            locale: Some(locale.into()),
            value,
        }
    }

    /// Returns the natural key used to match this attribute across
    /// representations.
    pub fn key(&self) -> AttributeKey {
        AttributeKey {
            name: self.name.clone(),
            locale: self.locale.clone(),
        }
    }

    /// Returns true if the value is the absent value (JSON `null`).
    pub fn is_absent(&self) -> bool {
        self.value.is_null()
    }
}

/// Natural key of an attribute: name plus locale scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeKey {
    /// Attribute name.
    pub name: String,
    /// Locale scope, if any.
    pub locale: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_includes_locale() {
        let en = Attribute::localized("description", "en", json!("text"));
        let de = Attribute::localized("description", "de", json!("Text"));
        assert_ne!(en.key(), de.key());
        assert_eq!(en.key(), en.clone().key());
    }

    #[test]
    fn null_value_is_absent() {
        assert!(Attribute::new("color", Value::Null).is_absent());
        assert!(!Attribute::new("color", json!("red")).is_absent());
    }

    #[test]
    fn value_defaults_to_null() {
        let a: Attribute = serde_json::from_value(json!({"name": "color"})).unwrap();
        assert!(a.is_absent());
    }
}
