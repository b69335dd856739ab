//! Ordered HTML attribute bags.

mod value;

pub use value::{AttrValue, IntoAttrValue};

use crate::encode::escape;

/// Attributes that render before everything else, in this fixed order.
/// Anything not listed here follows in insertion order.
const CANONICAL_ORDER: &[&str] = &["class", "id", "name", "type", "value", "href", "for"];

/// An ordered mapping from attribute name to value.
///
/// Key order is preserved across sets; updating an existing key keeps its
/// position. Rendering puts a handful of well-known attributes first
/// (`class`, `id`, `name`, ...) and everything else in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Creates an empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets an attribute, updating in place if the name already exists.
    ///
    /// Setting [`AttrValue::Null`] removes the entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl IntoAttrValue) {
        let name = name.into();
        let value = value.into_attr_value();

        if matches!(value, AttrValue::Null) {
            self.remove(&name);
            return;
        }

        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value for a name, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns whether the name is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Returns whether the bag has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Merges another bag into this one, last write wins.
    pub fn extend(&mut self, other: &Self) {
        for (name, value) in &other.entries {
            self.set(name.clone(), value.clone());
        }
    }

    /// Serializes the bag to attribute text, each attribute preceded by a
    /// single space.
    ///
    /// Booleans render as the bare name when `true` and nothing when
    /// `false`; values are escaped.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        let canonical = CANONICAL_ORDER
            .iter()
            .filter_map(|name| self.get(name).map(|value| (*name, value)));
        let rest = self
            .entries
            .iter()
            .filter(|(name, _)| !CANONICAL_ORDER.contains(&name.as_str()))
            .map(|(name, value)| (name.as_str(), value));

        for (name, value) in canonical.chain(rest) {
            if !value.is_present() {
                continue;
            }
            match value.as_text() {
                None => {
                    out.push(' ');
                    out.push_str(name);
                }
                Some(text) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape(&text));
                    out.push('"');
                }
            }
        }

        out
    }
}

impl<K: Into<String>, V: IntoAttrValue> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}
