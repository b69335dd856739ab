//! Number input widget.

use super::{impl_input_mixins, BaseInput, LabelLayout};
use crate::element::Element;
use crate::mixin::{RangeAttrs, TextAttrs};

/// The `<input type="number">` widget.
#[derive(Debug, Clone)]
pub struct Number {
    base: BaseInput,
}

impl Number {
    /// Creates a number input with a generated id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: BaseInput::new("number", LabelLayout::Enclose),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::new()
    }
}

impl_input_mixins!(Number);

impl RangeAttrs for Number {}
impl TextAttrs for Number {}

impl Element for Number {
    fn render(&self) -> String {
        self.base.render()
    }
}
