//! Color input widget.

use super::{impl_input_mixins, BaseInput, LabelLayout};
use crate::element::Element;

/// The `<input type="color">` widget.
#[derive(Debug, Clone)]
pub struct Color {
    base: BaseInput,
}

impl Color {
    /// Creates a color input with a generated id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: BaseInput::new("color", LabelLayout::Enclose),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new()
    }
}

impl_input_mixins!(Color);

impl Element for Color {
    fn render(&self) -> String {
        self.base.render()
    }
}
