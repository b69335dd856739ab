//! Checkbox input widget.

use ingot_html::{tag, AttrValue, Attributes, IntoAttrValue};

use super::{impl_input_mixins, BaseInput, LabelLayout};
use crate::element::Element;

/// The `<input type="checkbox">` widget.
///
/// The label, when set, encloses the input; `uncheck_value` renders a
/// leading hidden input carrying the fallback submission value.
#[derive(Debug, Clone)]
pub struct Checkbox {
    base: BaseInput,
    checked: Option<bool>,
    checked_value: Option<String>,
    uncheck_value: Option<String>,
}

impl Checkbox {
    /// Creates a checkbox with a generated id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: BaseInput::new("checkbox", LabelLayout::Enclose),
            checked: None,
            checked_value: None,
            uncheck_value: None,
        }
    }

    /// Forces the `checked` attribute on or off, overriding the
    /// `checked_value` comparison.
    #[must_use]
    pub fn checked(mut self, value: bool) -> Self {
        self.checked = Some(value);
        self
    }

    /// Sets the value that marks this checkbox checked; the attribute
    /// renders when it matches the coerced `value`.
    #[must_use]
    pub fn checked_value(mut self, value: impl IntoAttrValue) -> Self {
        self.checked_value = value.into_attr_value().to_value_text();
        self
    }

    /// Sets the fallback value submitted while the checkbox is unchecked,
    /// rendered as a hidden input before the checkbox.
    #[must_use]
    pub fn uncheck_value(mut self, value: impl IntoAttrValue) -> Self {
        self.uncheck_value = value.into_attr_value().to_value_text();
        self
    }

    fn is_checked(&self) -> bool {
        match self.checked {
            Some(explicit) => explicit,
            None => match (&self.checked_value, self.base.attrs.get("value")) {
                (Some(checked_value), Some(value)) => {
                    value.as_text().as_deref() == Some(checked_value.as_str())
                }
                _ => false,
            },
        }
    }

    fn render_uncheck_input(&self) -> String {
        let Some(uncheck_value) = &self.uncheck_value else {
            return String::new();
        };

        let mut attrs = Attributes::new();
        if let Some(name) = self.base.attrs.get("name").and_then(AttrValue::as_text) {
            attrs.set("name", name);
        }
        attrs.set("type", "hidden");
        attrs.set("value", uncheck_value.clone());

        tag::build("input", "", &attrs)
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl_input_mixins!(Checkbox);

impl Element for Checkbox {
    fn render(&self) -> String {
        let mut attrs = self.base.attrs.clone();
        if self.is_checked() {
            attrs.set("checked", true);
        }

        self.base.render_from(&attrs, &self.render_uncheck_input())
    }
}
