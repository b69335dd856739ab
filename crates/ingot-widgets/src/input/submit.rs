//! Submit button widget.

use super::{impl_input_mixins, BaseInput, LabelLayout};
use crate::element::Element;
use crate::mixin::SubmitAttrs;

/// The `<input type="submit">` widget.
///
/// Carries the submission-override attributes (`formaction`,
/// `formmethod`, `formenctype`); the constrained ones validate at the
/// setter call.
#[derive(Debug, Clone)]
pub struct Submit {
    base: BaseInput,
}

impl Submit {
    /// Creates a submit button with a generated id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: BaseInput::new("submit", LabelLayout::Stacked),
        }
    }
}

impl Default for Submit {
    fn default() -> Self {
        Self::new()
    }
}

impl_input_mixins!(Submit);

impl SubmitAttrs for Submit {}

impl Element for Submit {
    fn render(&self) -> String {
        self.base.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixin::{Attributed, SubmitAttrs};
    use ingot_html::AttrValue;

    #[test]
    fn test_formmethod_stored_uppercase() {
        let submit = Submit::new().formmethod("get").unwrap();
        assert_eq!(
            submit.attrs().get("formmethod"),
            Some(&AttrValue::Text(String::from("GET")))
        );
    }

    #[test]
    fn test_formmethod_rejects_unknown() {
        let err = Submit::new().formmethod("").unwrap_err();
        assert!(err.to_string().contains("\"GET\", \"POST\""));
    }

    #[test]
    fn test_formenctype_rejects_unknown() {
        let err = Submit::new().formenctype("").unwrap_err();
        assert!(err.to_string().contains("multipart/form-data"));
    }
}
