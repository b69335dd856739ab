//! List widgets: `<ul>`/`<ol>` and their `<li>` items.

use ingot_html::{add_class, encode, tag, Attributes, Content, HtmlError, Result};

use crate::element::Element;
use crate::mixin::{Attributed, GlobalAttrs};

const LIST_TYPES: &[&str] = &["ul", "ol"];

/// The `<li>` element.
#[derive(Debug, Clone, Default)]
pub struct Li {
    attrs: Attributes,
    content: String,
}

impl Li {
    /// Creates an empty list item.
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

impl Attributed for Li {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

impl GlobalAttrs for Li {}

impl Element for Li {
    fn render(&self) -> String {
        tag::build("li", &self.content, &self.attrs)
    }
}

/// An ordered or unordered list of `<li>` items.
#[derive(Debug, Clone)]
pub struct TagList {
    attrs: Attributes,
    item_attrs: Attributes,
    items: Vec<String>,
    list_type: &'static str,
}

impl TagList {
    /// Creates an empty `<ol>` list.
    #[must_use]
    pub fn ol() -> Self {
        Self::with_type("ol")
    }

    /// Creates an empty `<ul>` list.
    #[must_use]
    pub fn ul() -> Self {
        Self::with_type("ul")
    }

    fn with_type(list_type: &'static str) -> Self {
        Self {
            attrs: Attributes::new(),
            item_attrs: Attributes::new(),
            items: Vec::new(),
            list_type,
        }
    }

    /// Appends one `<li>` item built from encoded fragments.
    #[must_use]
    pub fn item<I>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = Content>,
    {
        self.items.push(encode(parts));
        self
    }

    /// Appends an already-rendered widget as one `<li>` item.
    #[must_use]
    pub fn item_widget<E: Element>(mut self, widget: &E) -> Self {
        self.items.push(widget.render());
        self
    }

    /// Sets the attributes applied to every generated `<li>`.
    #[must_use]
    pub fn item_attributes<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ingot_html::IntoAttrValue,
    {
        for (name, value) in values {
            self.item_attrs.set(name, value);
        }
        self
    }

    /// Adds a CSS class to every generated `<li>`.
    #[must_use]
    pub fn item_class(mut self, value: &str) -> Self {
        add_class(&mut self.item_attrs, value);
        self
    }

    /// Switches the list tag between `ul` and `ol`.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is neither `ul` nor `ol`.
    pub fn list_type(mut self, value: &str) -> Result<Self> {
        match LIST_TYPES.iter().find(|candidate| **candidate == value) {
            Some(canonical) => {
                self.list_type = canonical;
                Ok(self)
            }
            None => Err(HtmlError::invalid_value("list type", &["\"ul\"", "\"ol\""])),
        }
    }
}

impl Attributed for TagList {
    fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

impl GlobalAttrs for TagList {}

impl Element for TagList {
    fn render(&self) -> String {
        let items = self
            .items
            .iter()
            .map(|item| tag::build("li", item, &self.item_attrs))
            .collect::<Vec<_>>()
            .join("\n");
        tag::build(self.list_type, &items, &self.attrs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mixin::GlobalAttrs;

    #[test]
    fn test_li_empty() {
        assert_eq!(Li::new().render(), "<li>\n</li>");
    }

    #[test]
    fn test_li_content() {
        let li = Li::new().content([Content::text("Content")]);
        assert_eq!(li.render(), "<li>\nContent\n</li>");
    }

    #[test]
    fn test_li_bare_attribute() {
        let li = Li::new().attribute("disabled", true);
        assert_eq!(li.render(), "<li disabled>\n</li>");
    }

    #[test]
    fn test_empty_ul() {
        assert_eq!(TagList::ul().render(), "<ul>\n</ul>");
    }

    #[test]
    fn test_ol_items() {
        let list = TagList::ol()
            .item([Content::text("Red")])
            .item([Content::text("Blue")]);
        assert_eq!(
            list.render(),
            "<ol>\n<li>\nRed\n</li>\n<li>\nBlue\n</li>\n</ol>"
        );
    }

    #[test]
    fn test_item_class() {
        let list = TagList::ul().item_class("row").item([Content::text("A")]);
        assert_eq!(list.render(), "<ul>\n<li class=\"row\">\nA\n</li>\n</ul>");
    }

    #[test]
    fn test_list_type_switch() {
        let list = TagList::ul().list_type("ol").unwrap();
        assert_eq!(list.render(), "<ol>\n</ol>");
    }

    #[test]
    fn test_invalid_list_type() {
        let err = TagList::ul().list_type("dl").unwrap_err();
        assert_eq!(
            err.to_string(),
            "the list type attribute must be one of the following values: \"ul\", \"ol\""
        );
    }
}
