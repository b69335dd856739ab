//! Text input widget.

use super::{impl_input_mixins, BaseInput, LabelLayout};
use crate::element::Element;
use crate::mixin::TextAttrs;

/// The `<input type="text">` widget.
#[derive(Debug, Clone)]
pub struct Text {
    base: BaseInput,
}

impl Text {
    /// Creates a text input with a generated id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: BaseInput::new("text", LabelLayout::Enclose),
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl_input_mixins!(Text);

impl TextAttrs for Text {}

impl Element for Text {
    fn render(&self) -> String {
        self.base.render()
    }
}
