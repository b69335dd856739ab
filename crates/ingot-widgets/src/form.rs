//! The `<form>` widget.

use ingot_html::{encode, tag, Attributes, Content, Result};

use crate::element::Element;
use crate::mixin::{validate_enctype, validate_method, Attributed, GlobalAttrs};

/// The `<form>` element, with a split-tag API for wrapping arbitrary
/// markup between `begin()` and `end()`.
#[derive(Debug, Clone, Default)]
pub struct Form {
    attrs: Attributes,
    content: String,
}

impl Form {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `action` attribute.
    #[must_use]
    pub fn action(mut self, value: &str) -> Self {
        self.attrs.set("action", value);
        self
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

    /// Sets the `enctype` attribute.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not a valid form encoding type.
    pub fn enctype(mut self, value: &str) -> Result<Self> {
        validate_enctype("enctype", value)?;
        self.attrs.set("enctype", value);
        Ok(self)
    }

    /// Sets the `method` attribute, canonicalized to upper case.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not `GET` or `POST`.
    pub fn method(mut self, value: &str) -> Result<Self> {
        let canonical = validate_method("method", value)?;
        self.attrs.set("method", canonical);
        Ok(self)
    }

    /// Sets the bare `novalidate` attribute.
    #[must_use]
    pub fn novalidate(mut self) -> Self {
        self.attrs.set("novalidate", true);
        self
    }

    /// Renders only the opening tag.
    #[must_use]
    pub fn begin(&self) -> String {
        tag::open("form", &self.attrs)
    }

    /// Returns the closing tag.
    #[must_use]
    pub const fn end() -> &'static str {
        "</form>"
    }
}

impl Attributed for Form {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

impl GlobalAttrs for Form {}

impl Element for Form {
    fn render(&self) -> String {
        tag::build("form", &self.content, &self.attrs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_form() {
        assert_eq!(Form::new().render(), "<form>\n</form>");
    }

    #[test]
    fn test_action_and_method() {
        let form = Form::new().action("/search").method("get").unwrap();
        assert_eq!(
            form.render(),
            "<form action=\"/search\" method=\"GET\">\n</form>"
        );
    }

    #[test]
    fn test_enctype() {
        let form = Form::new().enctype("multipart/form-data").unwrap();
        assert_eq!(
            form.render(),
            "<form enctype=\"multipart/form-data\">\n</form>"
        );
    }

    #[test]
    fn test_invalid_method() {
        let err = Form::new().method("put").unwrap_err();
        assert_eq!(
            err.to_string(),
            "the method attribute must be one of the following values: \"GET\", \"POST\""
        );
    }

    #[test]
    fn test_invalid_enctype() {
        let err = Form::new().enctype("value").unwrap_err();
        assert_eq!(
            err.to_string(),
            "the enctype attribute must be one of the following values: multipart/form-data, application/x-www-form-urlencoded, text/plain"
        );
    }

    #[test]
    fn test_begin_end() {
        let open = Form::new().action("/login").begin();
        assert_eq!(
            format!("{open}\n{}", Form::end()),
            "<form action=\"/login\">\n</form>"
        );
    }
}
