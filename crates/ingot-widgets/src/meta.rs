//! Metadata element widget.

use ingot_html::{tag, Attributes};

use crate::element::Element;
use crate::mixin::{Attributed, GlobalAttrs};

/// The `<meta>` void element.
#[derive(Debug, Clone, Default)]
pub struct Meta {
    attrs: Attributes,
}

impl Meta {
    /// Creates an empty `<meta>` widget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `charset` attribute.
    #[must_use]
    pub fn charset(mut self, value: &str) -> Self {
        self.attrs.set("charset", value);
        self
    }

    /// Sets the `name`/`content` attribute pair.
    #[must_use]
    pub fn content(mut self, name: &str, content: &str) -> Self {
        self.attrs.set("name", name);
        self.attrs.set("content", content);
        self
    }

    /// Sets the `http-equiv`/`content` attribute pair.
    #[must_use]
    pub fn http_equiv(mut self, name: &str, content: &str) -> Self {
        self.attrs.set("http-equiv", name);
        self.attrs.set("content", content);
        self
    }

    /// Sets the `property`/`content` attribute pair (Open Graph style).
    #[must_use]
    pub fn property(mut self, name: &str, content: &str) -> Self {
        self.attrs.set("property", name);
        self.attrs.set("content", content);
        self
    }
}

impl Attributed for Meta {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

impl GlobalAttrs for Meta {}

impl Element for Meta {
    fn render(&self) -> String {
        tag::build("meta", "", &self.attrs)
    }
}
