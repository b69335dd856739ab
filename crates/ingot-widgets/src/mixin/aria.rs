//! WAI-ARIA attributes.

use ingot_html::IntoAttrValue;

use super::Attributed;

/// Builder methods for ARIA attributes.
pub trait AriaAttrs: Attributed {
    /// Sets the `aria-label` attribute.
    #[must_use]
    fn aria_label(mut self, value: &str) -> Self {
        self.attrs_mut().set("aria-label", value);
        self
    }

    /// Sets the `aria-describedby` attribute.
    ///
    /// Besides id strings, `true` asks the widget to derive
    /// `{id}-help` from its own id at render time and `false` suppresses
    /// the attribute.
    #[must_use]
    fn aria_describedby(mut self, value: impl IntoAttrValue) -> Self {
        self.attrs_mut().set("aria-describedby", value);
        self
    }
}
