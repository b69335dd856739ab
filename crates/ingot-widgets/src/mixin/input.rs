//! Form-control attributes.

use ingot_html::{normalize_regexp_pattern, AttrValue, IntoAttrValue, Result};

use super::Attributed;

/// Builder methods common to form controls.
pub trait InputAttrs: Attributed {
    /// Sets the bare `autofocus` attribute.
    #[must_use]
    fn autofocus(mut self) -> Self {
        self.attrs_mut().set("autofocus", true);
        self
    }

    /// Sets the bare `disabled` attribute.
    #[must_use]
    fn disabled(mut self) -> Self {
        self.attrs_mut().set("disabled", true);
        self
    }

    /// Sets the `form` attribute, associating the control with a form id.
    #[must_use]
    fn form(mut self, value: &str) -> Self {
        self.attrs_mut().set("form", value);
        self
    }

    /// Sets the bare `hidden` attribute.
    #[must_use]
    fn hidden(mut self) -> Self {
        self.attrs_mut().set("hidden", true);
        self
    }

    /// Sets the `name` attribute; `None` clears it.
    #[must_use]
    fn name(mut self, value: impl IntoAttrValue) -> Self {
        self.attrs_mut().set("name", value);
        self
    }

    /// Sets the bare `readonly` attribute.
    #[must_use]
    fn readonly(mut self) -> Self {
        self.attrs_mut().set("readonly", true);
        self
    }

    /// Sets the bare `required` attribute.
    #[must_use]
    fn required(mut self) -> Self {
        self.attrs_mut().set("required", true);
        self
    }

    /// Sets the `tabindex` attribute.
    #[must_use]
    fn tab_index(mut self, value: i64) -> Self {
        self.attrs_mut().set("tabindex", value);
        self
    }

    /// Sets the `value` attribute.
    ///
    /// Values are coerced to submission text: booleans become `"1"`/`"0"`,
    /// numbers are stringified, `None` removes the attribute.
    #[must_use]
    fn value(mut self, value: impl IntoAttrValue) -> Self {
        match value.into_attr_value().to_value_text() {
            Some(text) => self.attrs_mut().set("value", text),
            None => {
                self.attrs_mut().remove("value");
            }
        }
        self
    }

    /// Returns the coerced `value` attribute text, if set.
    fn get_value(&self) -> Option<String> {
        self.attrs().get("value").and_then(AttrValue::as_text)
    }
}

/// Builder methods for range-constrained controls.
pub trait RangeAttrs: Attributed {
    /// Sets the `max` attribute.
    #[must_use]
    fn max(mut self, value: impl IntoAttrValue) -> Self {
        self.attrs_mut().set("max", value);
        self
    }

    /// Sets the `min` attribute.
    #[must_use]
    fn min(mut self, value: impl IntoAttrValue) -> Self {
        self.attrs_mut().set("min", value);
        self
    }

    /// Sets the `step` attribute.
    #[must_use]
    fn step(mut self, value: impl IntoAttrValue) -> Self {
        self.attrs_mut().set("step", value);
        self
    }
}

/// Builder methods for textual controls.
pub trait TextAttrs: Attributed {
    /// Sets the `maxlength` attribute.
    #[must_use]
    fn maxlength(mut self, value: usize) -> Self {
        self.attrs_mut().set("maxlength", value);
        self
    }

    /// Sets the `minlength` attribute.
    #[must_use]
    fn minlength(mut self, value: usize) -> Self {
        self.attrs_mut().set("minlength", value);
        self
    }

    /// Sets the `pattern` attribute verbatim.
    #[must_use]
    fn pattern(mut self, value: &str) -> Self {
        self.attrs_mut().set("pattern", value);
        self
    }

    /// Sets the `placeholder` attribute.
    #[must_use]
    fn placeholder(mut self, value: &str) -> Self {
        self.attrs_mut().set("placeholder", value);
        self
    }

    /// Sets the `pattern` attribute from a delimited PCRE-style
    /// expression, normalizing `\x{...}` escapes and stripping the
    /// delimiters and flags.
    ///
    /// # Errors
    ///
    /// Returns [`ingot_html::HtmlError::Configuration`] when the
    /// expression or delimiter is malformed.
    fn regexp_pattern(mut self, value: &str) -> Result<Self> {
        let normalized = normalize_regexp_pattern(value, None)?;
        self.attrs_mut().set("pattern", normalized);
        Ok(self)
    }

    /// Sets the `size` attribute.
    #[must_use]
    fn size(mut self, value: usize) -> Self {
        self.attrs_mut().set("size", value);
        self
    }
}
