//! CSS class merging.

use crate::attribute::{AttrValue, Attributes};

/// Appends a class token to the bag's `class` entry.
///
/// An absent entry becomes the single token; an existing string gets the
/// token appended with a space; a list value pushes the token. No
/// de-duplication, no sorting — insertion order is kept.
pub fn add_class(attrs: &mut Attributes, class: &str) {
    if class.is_empty() {
        return;
    }

    match attrs.remove("class") {
        None => attrs.set("class", class),
        Some(AttrValue::List(mut tokens)) => {
            tokens.push(String::from(class));
            attrs.set("class", AttrValue::List(tokens));
        }
        Some(existing) => {
            let current = existing.as_text().unwrap_or_default();
            if current.is_empty() {
                attrs.set("class", class);
            } else {
                attrs.set("class", format!("{current} {class}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_empty_bag() {
        let mut attrs = Attributes::new();
        add_class(&mut attrs, "foo");

        assert_eq!(attrs.get("class"), Some(&AttrValue::Text(String::from("foo"))));
    }

    #[test]
    fn test_append_to_existing() {
        let mut attrs = Attributes::new();
        add_class(&mut attrs, "foo");
        add_class(&mut attrs, "bar");

        assert_eq!(
            attrs.get("class"),
            Some(&AttrValue::Text(String::from("foo bar")))
        );
    }

    #[test]
    fn test_no_dedup() {
        let mut attrs = Attributes::new();
        add_class(&mut attrs, "foo");
        add_class(&mut attrs, "foo");

        assert_eq!(
            attrs.get("class"),
            Some(&AttrValue::Text(String::from("foo foo")))
        );
    }

    #[test]
    fn test_append_to_list_value() {
        let mut attrs = Attributes::new();
        attrs.set("class", vec![String::from("a")]);
        add_class(&mut attrs, "b");

        assert_eq!(
            attrs.get("class"),
            Some(&AttrValue::List(vec![String::from("a"), String::from("b")]))
        );
    }

    #[test]
    fn test_empty_token_ignored() {
        let mut attrs = Attributes::new();
        add_class(&mut attrs, "");

        assert!(attrs.is_empty());
    }
}
