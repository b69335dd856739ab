//! Tag rendering.

use crate::attribute::Attributes;

/// Void elements: no closing tag, content ignored.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Block-level elements whose content is wrapped in newlines.
const BLOCK_ELEMENTS: &[&str] = &[
    "article", "aside", "div", "fieldset", "footer", "form", "header", "li", "main", "nav", "ol",
    "section", "ul",
];

/// Returns whether the tag is a void element.
#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Renders the opening tag, attributes included.
#[must_use]
pub fn open(tag: &str, attrs: &Attributes) -> String {
    format!("<{tag}{}>", attrs.render())
}

/// Renders the closing tag.
#[must_use]
pub fn close(tag: &str) -> String {
    format!("</{tag}>")
}

/// Renders a complete tag.
///
/// Void elements render `<tag attrs>` and drop the content. Block-level
/// elements put the content on its own line (`<li>\nContent\n</li>`;
/// empty content keeps a single newline between the tags). Everything
/// else renders inline, content verbatim — callers escape through the
/// encoder first.
#[must_use]
pub fn build(tag: &str, content: &str, attrs: &Attributes) -> String {
    let open = open(tag, attrs);

    if is_void(tag) {
        return open;
    }

    if BLOCK_ELEMENTS.contains(&tag) {
        if content.is_empty() {
            return format!("{open}\n{}", close(tag));
        }
        return format!("{open}\n{content}\n{}", close(tag));
    }

    format!("{open}{content}{}", close(tag))
}
