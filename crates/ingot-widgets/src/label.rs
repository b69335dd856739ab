//! Standalone label widget.

use ingot_html::{encode, tag, Attributes, Content};

use crate::element::Element;
use crate::mixin::{Attributed, GlobalAttrs};

/// The `<label>` element.
#[derive(Debug, Clone, Default)]
pub struct Label {
    attrs: Attributes,
    content: String,
}

impl Label {
    /// Creates an empty label.
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

    /// Sets the `for` attribute.
    #[must_use]
    pub fn for_id(mut self, value: &str) -> Self {
        self.attrs.set("for", value);
        self
    }
}

impl Attributed for Label {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

impl GlobalAttrs for Label {}

impl Element for Label {
    fn render(&self) -> String {
        tag::build("label", &self.content, &self.attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let label = Label::new().for_id("name").content([Content::text("Name")]);
        assert_eq!(label.render(), r#"<label for="name">Name</label>"#);
    }

    #[test]
    fn test_content_escaped() {
        let label = Label::new().content([Content::text("a & b")]);
        assert_eq!(label.render(), "<label>a &amp; b</label>");
    }
}
