//! Simple document-level tag widgets.

use ingot_html::{encode, tag, Attributes, Content};

use crate::element::Element;
use crate::mixin::{AriaAttrs, Attributed, GlobalAttrs};

/// The `<a>` anchor element.
#[derive(Debug, Clone, Default)]
pub struct A {
    attrs: Attributes,
    content: String,
}

impl A {
    /// Creates an empty anchor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content from fragments run through the encoder.
    #[must_use]
    pub fn content<I>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = Content>,
    {
        self.content = encode(parts);
        self
    }

    /// Sets the bare `download` attribute.
    #[must_use]
    pub fn download(mut self, value: bool) -> Self {
        self.attrs.set("download", value);
        self
    }

    /// Sets the `href` attribute.
    #[must_use]
    pub fn href(mut self, value: &str) -> Self {
        self.attrs.set("href", value);
        self
    }
}

impl Attributed for A {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

impl GlobalAttrs for A {}
impl AriaAttrs for A {}

impl Element for A {
    fn render(&self) -> String {
        tag::build("a", &self.content, &self.attrs)
    }
}

/// The `<span>` element.
#[derive(Debug, Clone, Default)]
pub struct Span {
    attrs: Attributes,
    content: String,
}

impl Span {
    /// Creates an empty span.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content from fragments run through the encoder.
    #[must_use]
    pub fn content<I>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = Content>,
    {
        self.content = encode(parts);
        self
    }
}

impl Attributed for Span {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

impl GlobalAttrs for Span {}

impl Element for Span {
    fn render(&self) -> String {
        tag::build("span", &self.content, &self.attrs)
    }
}

/// The `<header>` element, with a split-tag API for wrapping arbitrary
/// markup between `begin()` and `end()`.
#[derive(Debug, Clone, Default)]
pub struct Header {
    attrs: Attributes,
    content: String,
}

impl Header {
    /// Creates an empty header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content from fragments run through the encoder.
    #[must_use]
    pub fn content<I>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = Content>,
    {
        self.content = encode(parts);
        self
    }

    /// Renders only the opening tag.
    #[must_use]
    pub fn begin(&self) -> String {
        tag::open("header", &self.attrs)
    }

    /// Returns the closing tag.
    #[must_use]
    pub const fn end() -> &'static str {
        "</header>"
    }
}

impl Attributed for Header {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

impl GlobalAttrs for Header {}

impl Element for Header {
    fn render(&self) -> String {
        tag::build("header", &self.content, &self.attrs)
    }
}
