//! Form-control input widgets.

mod checkbox;
mod color;
mod date;
mod hidden;
mod number;
mod reset;
mod submit;
mod text;
mod time;

pub use checkbox::Checkbox;
pub use color::Color;
pub use date::Date;
pub use hidden::Hidden;
pub use number::Number;
pub use reset::Reset;
pub use submit::Submit;
pub use text::Text;
pub use time::Time;

use ingot_html::{expand, join_lines, tag, AttrValue, Attributes};

use crate::mixin::{Affix, Container, LabelParts};

/// Where the control's `<label>` goes relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelLayout {
    /// The label encloses the input (checkbox style).
    Enclose,
    /// The label precedes the input as a sibling (reset/submit style).
    Stacked,
}

/// Shared state and render pipeline for `<input>` widgets.
#[derive(Debug, Clone)]
pub(crate) struct BaseInput {
    pub(crate) attrs: Attributes,
    pub(crate) template: String,
    pub(crate) prefix: Affix,
    pub(crate) suffix: Affix,
    pub(crate) container: Container,
    pub(crate) label: LabelParts,
    label_layout: LabelLayout,
}

impl BaseInput {
    pub(crate) fn new(kind: &'static str, layout: LabelLayout) -> Self {
        let mut attrs = Attributes::new();
        attrs.set("type", kind);
        attrs.set("id", generate_id(kind));

        Self {
            attrs,
            template: match layout {
                LabelLayout::Enclose => String::from("{prefix}{tag}{suffix}"),
                LabelLayout::Stacked => String::from("{prefix}{label}{tag}{suffix}"),
            },
            prefix: Affix::default(),
            suffix: Affix::default(),
            container: match layout {
                LabelLayout::Enclose => Container::default(),
                LabelLayout::Stacked => Container::enabled(),
            },
            label: LabelParts::default(),
            label_layout: layout,
        }
    }

    /// Renders the full control from a final attribute bag.
    ///
    /// `lead` is pre-rendered markup placed directly before the input on
    /// its own line (the checkbox's unchecked fallback).
    pub(crate) fn render_from(&self, attrs: &Attributes, lead: &str) -> String {
        let mut attrs = attrs.clone();
        resolve_aria_describedby(&mut attrs);

        let input = tag::build("input", "", &attrs);
        let input = if lead.is_empty() {
            input
        } else {
            format!("{lead}\n{input}")
        };

        let prefix = self.prefix.render();
        let suffix = self.suffix.render();

        let core = if self.label.is_active() && self.label_layout == LabelLayout::Enclose {
            let inner = join_lines([
                prefix.as_str(),
                input.as_str(),
                suffix.as_str(),
                self.label.content.as_str(),
            ]);
            tag::build("label", &format!("\n{inner}\n"), &self.label_attrs(&attrs))
        } else {
            let label = if self.label.is_active() {
                tag::build("label", &self.label.content, &self.label_attrs(&attrs))
            } else {
                String::new()
            };

            let prefix_token = terminated(&prefix);
            let label_token = terminated(&label);
            let suffix_token = if suffix.is_empty() {
                String::new()
            } else {
                format!("\n{suffix}")
            };

            expand(
                &self.template,
                &[
                    ("prefix", prefix_token.as_str()),
                    ("label", label_token.as_str()),
                    ("tag", input.as_str()),
                    ("suffix", suffix_token.as_str()),
                ],
            )
        };

        self.container.wrap(&core)
    }

    pub(crate) fn render(&self) -> String {
        self.render_from(&self.attrs, "")
    }

    fn label_attrs(&self, input_attrs: &Attributes) -> Attributes {
        let mut label_attrs = self.label.attributes.clone();
        let for_id = self
            .label
            .for_id
            .clone()
            .or_else(|| input_attrs.get("id").and_then(AttrValue::as_text));
        if let Some(for_id) = for_id {
            label_attrs.set("for", for_id);
        }
        label_attrs
    }
}

/// `aria-describedby` booleans are placeholders: `true` derives
/// `{id}-help` from the control's id, `false` suppresses the attribute.
fn resolve_aria_describedby(attrs: &mut Attributes) {
    match attrs.get("aria-describedby") {
        Some(AttrValue::Bool(true)) => {
            match attrs.get("id").and_then(AttrValue::as_text) {
                Some(id) => attrs.set("aria-describedby", format!("{id}-help")),
                None => {
                    attrs.remove("aria-describedby");
                }
            }
        }
        Some(AttrValue::Bool(false)) => {
            attrs.remove("aria-describedby");
        }
        _ => {}
    }
}

fn terminated(fragment: &str) -> String {
    if fragment.is_empty() {
        String::new()
    } else {
        format!("{fragment}\n")
    }
}

/// Generates a `{kind}-{12 hex digits}` default id.
fn generate_id(kind: &str) -> String {
    format!("{kind}-{:012x}", rand::random::<u64>() & 0xffff_ffff_ffff)
}

/// Implements the shared mixin accessors for an input widget built around
/// [`BaseInput`].
macro_rules! impl_input_mixins {
    ($widget:ident) => {
        impl $crate::mixin::Attributed for $widget {
            fn attrs(&self) -> &ingot_html::Attributes {
                &self.base.attrs
            }

            fn attrs_mut(&mut self) -> &mut ingot_html::Attributes {
                &mut self.base.attrs
            }
        }

        impl $crate::mixin::GlobalAttrs for $widget {}
        impl $crate::mixin::AriaAttrs for $widget {}
        impl $crate::mixin::InputAttrs for $widget {}

        impl $crate::mixin::HasAffixes for $widget {
            fn prefix_mut(&mut self) -> &mut $crate::mixin::Affix {
                &mut self.base.prefix
            }

            fn suffix_mut(&mut self) -> &mut $crate::mixin::Affix {
                &mut self.base.suffix
            }
        }

        impl $crate::mixin::HasContainer for $widget {
            fn container_mut(&mut self) -> &mut $crate::mixin::Container {
                &mut self.base.container
            }
        }

        impl $crate::mixin::HasLabel for $widget {
            fn label_mut(&mut self) -> &mut $crate::mixin::LabelParts {
                &mut self.base.label
            }
        }

        impl $crate::mixin::HasTemplate for $widget {
            fn template_mut(&mut self) -> &mut String {
                &mut self.base.template
            }
        }
    };
}

pub(crate) use impl_input_mixins;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = generate_id("number");
        assert!(id.starts_with("number-"));
        assert_eq!(id.len(), "number-".len() + 12);
    }

    #[test]
    fn test_aria_describedby_derived_from_id() {
        let mut attrs = Attributes::new();
        attrs.set("id", "n1");
        attrs.set("aria-describedby", true);
        resolve_aria_describedby(&mut attrs);

        assert_eq!(
            attrs.get("aria-describedby"),
            Some(&AttrValue::Text(String::from("n1-help")))
        );
    }

    #[test]
    fn test_aria_describedby_false_removed() {
        let mut attrs = Attributes::new();
        attrs.set("id", "n1");
        attrs.set("aria-describedby", false);
        resolve_aria_describedby(&mut attrs);

        assert!(!attrs.contains("aria-describedby"));
    }
}
