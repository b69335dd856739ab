//! Attribute values and conversions.

use serde::{Deserialize, Serialize};

/// A value carried by an HTML attribute.
///
/// Booleans follow the HTML boolean-attribute convention: `true` renders the
/// bare attribute name, `false` (like [`AttrValue::Null`]) renders nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Absent value; the attribute is omitted.
    Null,
    /// Boolean attribute.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Ordered list of tokens, joined with single spaces.
    List(Vec<String>),
}

impl AttrValue {
    /// Returns whether the attribute renders at all.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Returns the serialized attribute text, if any.
    ///
    /// `Bool(true)` has no text (the bare name is rendered instead);
    /// `Bool(false)` and `Null` have no rendering at all.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Null | Self::Bool(_) => None,
            Self::Int(n) => Some(n.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::List(tokens) => Some(tokens.join(" ")),
        }
    }

    /// Coerces the value to form-submission text.
    ///
    /// Unlike [`AttrValue::as_text`], booleans become `"1"`/`"0"` — the
    /// coercion checkbox values use.
    #[must_use]
    pub fn to_value_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(true) => Some(String::from("1")),
            Self::Bool(false) => Some(String::from("0")),
            _ => self.as_text(),
        }
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_i64().map_or_else(
                || Self::Float(n.as_f64().unwrap_or_default()),
                Self::Int,
            ),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            other @ serde_json::Value::Object(_) => Self::Text(other.to_string()),
        }
    }
}

/// Trait for types that can be converted to an [`AttrValue`].
pub trait IntoAttrValue {
    /// Converts the value.
    fn into_attr_value(self) -> AttrValue;
}

impl IntoAttrValue for AttrValue {
    fn into_attr_value(self) -> AttrValue {
        self
    }
}

impl IntoAttrValue for bool {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::Bool(self)
    }
}

impl IntoAttrValue for i64 {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::Int(self)
    }
}

impl IntoAttrValue for i32 {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::Int(i64::from(self))
    }
}

impl IntoAttrValue for u32 {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::Int(i64::from(self))
    }
}

impl IntoAttrValue for usize {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::Int(self as i64)
    }
}

impl IntoAttrValue for f64 {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::Float(self)
    }
}

impl IntoAttrValue for String {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::Text(self)
    }
}

impl IntoAttrValue for &str {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::Text(String::from(self))
    }
}

impl IntoAttrValue for Vec<String> {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::List(self)
    }
}

impl IntoAttrValue for &[&str] {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::List(self.iter().map(|s| String::from(*s)).collect())
    }
}

impl IntoAttrValue for serde_json::Value {
    fn into_attr_value(self) -> AttrValue {
        AttrValue::from(self)
    }
}

impl<T: IntoAttrValue> IntoAttrValue for Option<T> {
    fn into_attr_value(self) -> AttrValue {
        self.map_or(AttrValue::Null, IntoAttrValue::into_attr_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bool_presence() {
        assert!(AttrValue::Bool(true).is_present());
        assert!(!AttrValue::Bool(false).is_present());
        assert!(!AttrValue::Null.is_present());
    }

    #[test]
    fn test_as_text() {
        assert_eq!(AttrValue::Int(1).as_text(), Some(String::from("1")));
        assert_eq!(AttrValue::Bool(true).as_text(), None);
        assert_eq!(
            AttrValue::List(vec![String::from("a"), String::from("b")]).as_text(),
            Some(String::from("a b"))
        );
    }

    #[test]
    fn test_value_text_coerces_bools() {
        assert_eq!(AttrValue::Bool(true).to_value_text(), Some(String::from("1")));
        assert_eq!(AttrValue::Bool(false).to_value_text(), Some(String::from("0")));
        assert_eq!(AttrValue::Null.to_value_text(), None);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(AttrValue::from(json!("a")), AttrValue::Text(String::from("a")));
        assert_eq!(AttrValue::from(json!(3)), AttrValue::Int(3));
        assert_eq!(AttrValue::from(json!(null)), AttrValue::Null);
        assert_eq!(
            AttrValue::from(json!(["a", "b"])),
            AttrValue::List(vec![String::from("a"), String::from("b")])
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(None::<&str>.into_attr_value(), AttrValue::Null);
        assert_eq!(
            Some("x").into_attr_value(),
            AttrValue::Text(String::from("x"))
        );
    }
}
