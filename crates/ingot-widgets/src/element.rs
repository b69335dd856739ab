//! The rendering seam shared by all widgets.

use ingot_html::Content;

/// Trait for widgets that render to an HTML string.
///
/// Rendering is a pure function of the widget's current fields; it never
/// mutates the receiver. Widgets are `Clone` values — configure a clone
/// and the original keeps rendering what it always did.
pub trait Element {
    /// Renders the widget as HTML.
    fn render(&self) -> String;

    /// Wraps the rendered output as a pre-rendered [`Content`] fragment,
    /// so it passes through the content encoder without re-escaping.
    fn to_content(&self) -> Content {
        Content::raw(self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingot_html::encode;

    struct Fixed;

    impl Element for Fixed {
        fn render(&self) -> String {
            String::from("<b>&amp;</b>")
        }
    }

    #[test]
    fn test_to_content_is_raw() {
        let out = encode([Fixed.to_content()]);
        assert_eq!(out, "<b>&amp;</b>");
    }
}
