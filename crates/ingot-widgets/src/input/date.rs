//! Date input widget.

use super::{impl_input_mixins, BaseInput, LabelLayout};
use crate::element::Element;
use crate::mixin::RangeAttrs;

/// The `<input type="date">` widget.
#[derive(Debug, Clone)]
pub struct Date {
    base: BaseInput,
}

impl Date {
    /// Creates a date input with a generated id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: BaseInput::new("date", LabelLayout::Enclose),
        }
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::new()
    }
}

impl_input_mixins!(Date);

impl RangeAttrs for Date {}

impl Element for Date {
    fn render(&self) -> String {
        self.base.render()
    }
}
