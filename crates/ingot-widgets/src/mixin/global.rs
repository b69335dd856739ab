//! Global attributes available on every element.

use ingot_html::{add_class, IntoAttrValue};

use super::Attributed;

/// Builder methods for the global HTML attributes.
pub trait GlobalAttrs: Attributed {
    /// Sets a single attribute.
    #[must_use]
    fn attribute(mut self, name: impl Into<String>, value: impl IntoAttrValue) -> Self {
        self.attrs_mut().set(name, value);
        self
    }

    /// Bulk-sets attributes; later writes win over earlier ones, so this
    /// composes with the single-key setters in call order.
    #[must_use]
    fn attributes<K, V, I>(mut self, values: I) -> Self
    where
        K: Into<String>,
        V: IntoAttrValue,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in values {
            self.attrs_mut().set(name, value);
        }
        self
    }

    /// Appends a CSS class token.
    #[must_use]
    fn class(mut self, value: &str) -> Self {
        add_class(self.attrs_mut(), value);
        self
    }

    /// Sets the `id` attribute; `None` clears it.
    #[must_use]
    fn id(mut self, value: impl IntoAttrValue) -> Self {
        self.attrs_mut().set("id", value);
        self
    }

    /// Sets the `lang` attribute.
    #[must_use]
    fn lang(mut self, value: &str) -> Self {
        self.attrs_mut().set("lang", value);
        self
    }

    /// Sets the `style` attribute.
    #[must_use]
    fn style(mut self, value: &str) -> Self {
        self.attrs_mut().set("style", value);
        self
    }

    /// Sets the `title` attribute.
    #[must_use]
    fn title(mut self, value: &str) -> Self {
        self.attrs_mut().set("title", value);
        self
    }

    /// Sets `data-*` attributes from suffix/value pairs.
    #[must_use]
    fn data_attributes<K, V, I>(mut self, values: I) -> Self
    where
        K: AsRef<str>,
        V: IntoAttrValue,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in values {
            self.attrs_mut().set(format!("data-{}", name.as_ref()), value);
        }
        self
    }
}
