//! Prefix and suffix content parts.

use ingot_html::{add_class, encode, tag, Attributes, Content, IntoAttrValue};

/// One affix: pre-encoded content plus an optional wrapping container.
#[derive(Debug, Clone)]
pub struct Affix {
    pub(crate) content: String,
    pub(crate) container: bool,
    pub(crate) container_attributes: Attributes,
    pub(crate) container_tag: String,
}

impl Default for Affix {
    fn default() -> Self {
        Self {
            content: String::new(),
            container: false,
            container_attributes: Attributes::new(),
            container_tag: String::from("div"),
        }
    }
}

impl Affix {
    /// Renders the affix, wrapping the content in its container when
    /// enabled. Empty content renders nothing at all.
    #[must_use]
    pub fn render(&self) -> String {
        if self.content.is_empty() {
            return String::new();
        }
        if self.container {
            return tag::build(&self.container_tag, &self.content, &self.container_attributes);
        }
        self.content.clone()
    }
}

/// Builder methods for widgets with prefix and suffix content.
pub trait HasAffixes: Sized {
    /// Mutably borrows the prefix part.
    fn prefix_mut(&mut self) -> &mut Affix;

    /// Mutably borrows the suffix part.
    fn suffix_mut(&mut self) -> &mut Affix;

    /// Sets the prefix content from fragments run through the encoder.
    #[must_use]
    fn prefix<I>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = Content>,
    {
        self.prefix_mut().content = encode(parts);
        self
    }

    /// Enables or disables the prefix container.
    #[must_use]
    fn prefix_container(mut self, enabled: bool) -> Self {
        self.prefix_mut().container = enabled;
        self
    }

    /// Sets the prefix container attributes.
    #[must_use]
    fn prefix_container_attributes<K, V, I>(mut self, values: I) -> Self
    where
        K: Into<String>,
        V: IntoAttrValue,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in values {
            self.prefix_mut().container_attributes.set(name, value);
        }
        self
    }

    /// Appends a CSS class to the prefix container.
    #[must_use]
    fn prefix_container_class(mut self, value: &str) -> Self {
        add_class(&mut self.prefix_mut().container_attributes, value);
        self
    }

    /// Sets the prefix container tag name.
    #[must_use]
    fn prefix_container_tag(mut self, value: &str) -> Self {
        self.prefix_mut().container_tag = String::from(value);
        self
    }

    /// Sets the suffix content from fragments run through the encoder.
    #[must_use]
    fn suffix<I>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = Content>,
    {
        self.suffix_mut().content = encode(parts);
        self
    }

    /// Enables or disables the suffix container.
    #[must_use]
    fn suffix_container(mut self, enabled: bool) -> Self {
        self.suffix_mut().container = enabled;
        self
    }

    /// Sets the suffix container attributes.
    #[must_use]
    fn suffix_container_attributes<K, V, I>(mut self, values: I) -> Self
    where
        K: Into<String>,
        V: IntoAttrValue,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in values {
            self.suffix_mut().container_attributes.set(name, value);
        }
        self
    }

    /// Appends a CSS class to the suffix container.
    #[must_use]
    fn suffix_container_class(mut self, value: &str) -> Self {
        add_class(&mut self.suffix_mut().container_attributes, value);
        self
    }

    /// Sets the suffix container tag name.
    #[must_use]
    fn suffix_container_tag(mut self, value: &str) -> Self {
        self.suffix_mut().container_tag = String::from(value);
        self
    }
}
