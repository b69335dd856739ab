//! The `<svg>` widget.
//!
//! Renders either inline content wrapped in an `<svg>` tag, or an external
//! `.svg` file streamed through an XML reader: comments and the XML
//! prologue are dropped, the root element's attributes are merged with the
//! configured ones, and `viewBox` is removed when both `height` and `width`
//! are set explicitly.

use std::fs;

use ingot_html::{tag, Attributes, HtmlError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::mixin::{Attributed, GlobalAttrs};

/// A scalable vector graphic, sourced from inline content or a file.
#[derive(Debug, Clone, Default)]
pub struct Svg {
    attrs: Attributes,
    content: String,
    file_path: String,
}

impl Svg {
    /// Creates an empty widget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets inline SVG markup, used verbatim as the tag body.
    #[must_use]
    pub fn content(mut self, value: impl Into<String>) -> Self {
        self.content = value.into();
        self
    }

    /// Sets the path of an external `.svg` file.
    #[must_use]
    pub fn file_path(mut self, value: impl Into<String>) -> Self {
        self.file_path = value.into();
        self
    }

    /// Sets the `fill` attribute.
    #[must_use]
    pub fn fill(mut self, value: &str) -> Self {
        self.attrs.set("fill", value);
        self
    }

    /// Sets the `height` attribute.
    #[must_use]
    pub fn height(mut self, value: impl ingot_html::IntoAttrValue) -> Self {
        self.attrs.set("height", value);
        self
    }

    /// Sets the `stroke` attribute.
    #[must_use]
    pub fn stroke(mut self, value: &str) -> Self {
        self.attrs.set("stroke", value);
        self
    }

    /// Sets the `viewBox` attribute.
    #[must_use]
    pub fn view_box(mut self, value: &str) -> Self {
        self.attrs.set("viewBox", value);
        self
    }

    /// Sets the `width` attribute.
    #[must_use]
    pub fn width(mut self, value: impl ingot_html::IntoAttrValue) -> Self {
        self.attrs.set("width", value);
        self
    }

    /// Sets the `xmlns` attribute.
    #[must_use]
    pub fn xmlns(mut self, value: &str) -> Self {
        self.attrs.set("xmlns", value);
        self
    }

    /// Renders the widget.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless exactly one of the file path and
    /// the inline content is set, and a load error when the file cannot be
    /// read or holds no `<svg>` element.
    pub fn render(&self) -> Result<String> {
        match (self.file_path.is_empty(), self.content.is_empty()) {
            (true, true) => Err(HtmlError::Configuration(String::from(
                "file path and content cannot be empty at the same time",
            ))),
            (false, false) => Err(HtmlError::Configuration(String::from(
                "file path and content cannot be set at the same time",
            ))),
            (true, false) => Ok(tag::build(
                "svg",
                &format!("\n{}\n", self.content),
                &self.attrs,
            )),
            (false, true) => self.render_file(),
        }
    }

    fn render_file(&self) -> Result<String> {
        tracing::debug!(path = %self.file_path, "loading SVG file");

        let source = fs::read_to_string(&self.file_path).map_err(|err| self.load_error(err))?;
        let mut reader = Reader::from_str(&source);
        let mut writer = Writer::new(Vec::new());
        let mut depth = 0usize;
        let mut in_svg = false;

        loop {
            let event = reader.read_event().map_err(|err| self.load_error(err))?;

            if !in_svg {
                match event {
                    Event::Start(start) if start.name().as_ref() == b"svg" => {
                        let root = self.merge_root(&start)?;
                        writer
                            .write_event(Event::Start(root))
                            .map_err(|err| self.load_error(err))?;
                        in_svg = true;
                        depth = 1;
                    }
                    Event::Empty(start) if start.name().as_ref() == b"svg" => {
                        let root = self.merge_root(&start)?;
                        writer
                            .write_event(Event::Empty(root))
                            .map_err(|err| self.load_error(err))?;
                        break;
                    }
                    Event::Eof => {
                        return Err(HtmlError::SvgLoad {
                            path: self.file_path.clone(),
                            reason: String::from("no <svg> element found"),
                        })
                    }
                    // Prologue, comments, and anything before the root.
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Comment(_) => {}
                Event::Text(ref text) if text.iter().all(u8::is_ascii_whitespace) => {}
                Event::Start(_) => {
                    depth += 1;
                    writer
                        .write_event(event)
                        .map_err(|err| self.load_error(err))?;
                }
                Event::End(_) => {
                    depth -= 1;
                    writer
                        .write_event(event)
                        .map_err(|err| self.load_error(err))?;
                    if depth == 0 {
                        break;
                    }
                }
                Event::Eof => {
                    return Err(HtmlError::SvgLoad {
                        path: self.file_path.clone(),
                        reason: String::from("unexpected end of file inside <svg>"),
                    })
                }
                other => {
                    writer
                        .write_event(other)
                        .map_err(|err| self.load_error(err))?;
                }
            }
        }

        String::from_utf8(writer.into_inner()).map_err(|err| self.load_error(err))
    }

    /// Rebuilds the root `<svg>` start tag: file attributes keep their
    /// position, configured attributes override or append, and `viewBox`
    /// is dropped when explicit `height` and `width` replace it.
    fn merge_root(&self, start: &BytesStart<'_>) -> Result<BytesStart<'static>> {
        let strip_view_box = self.attrs.contains("height")
            && self.attrs.contains("width")
            && !self.attrs.contains("viewBox");
        let mut root = BytesStart::new("svg");
        let mut seen = Vec::new();

        for attr in start.attributes() {
            let attr = attr.map_err(|err| self.load_error(err))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();

            if strip_view_box && key == "viewBox" {
                continue;
            }

            let value = match self.attrs.get(&key) {
                Some(configured) => configured.to_value_text(),
                None => Some(
                    attr.unescape_value()
                        .map_err(|err| self.load_error(err))?
                        .into_owned(),
                ),
            };
            if let Some(value) = value {
                root.push_attribute((key.as_str(), value.as_str()));
            }
            seen.push(key);
        }

        for (name, value) in self.attrs.iter() {
            if seen.iter().any(|key| key == name) {
                continue;
            }
            if let Some(value) = value.to_value_text() {
                root.push_attribute((name, value.as_str()));
            }
        }

        Ok(root)
    }

    fn load_error(&self, err: impl std::fmt::Display) -> HtmlError {
        HtmlError::SvgLoad {
            path: self.file_path.clone(),
            reason: err.to_string(),
        }
    }
}

impl Attributed for Svg {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

impl GlobalAttrs for Svg {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_inline_content() {
        let svg = Svg::new()
            .xmlns("http://www.w3.org/2000/svg")
            .content("<circle cx=\"5\" cy=\"5\" r=\"4\"></circle>");
        assert_eq!(
            svg.render().unwrap(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\">\n<circle cx=\"5\" cy=\"5\" r=\"4\"></circle>\n</svg>"
        );
    }

    #[test]
    fn test_both_empty_is_an_error() {
        let err = Svg::new().render().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid widget configuration: file path and content cannot be empty at the same time"
        );
    }

    #[test]
    fn test_both_set_is_an_error() {
        let err = Svg::new()
            .content("<g></g>")
            .file_path("icon.svg")
            .render()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid widget configuration: file path and content cannot be set at the same time"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = Svg::new().file_path("no-such-file.svg").render().unwrap_err();
        assert!(matches!(err, HtmlError::SvgLoad { .. }));
    }
}
