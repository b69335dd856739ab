//! Time input widget.

use super::{impl_input_mixins, BaseInput, LabelLayout};
use crate::element::Element;
use crate::mixin::RangeAttrs;

/// The `<input type="time">` widget.
#[derive(Debug, Clone)]
pub struct Time {
    base: BaseInput,
}

impl Time {
    /// Creates a time input with a generated id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: BaseInput::new("time", LabelLayout::Enclose),
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl_input_mixins!(Time);

impl RangeAttrs for Time {}

impl Element for Time {
    fn render(&self) -> String {
        self.base.render()
    }
}
