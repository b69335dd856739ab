//! Hidden input widget.

use super::{impl_input_mixins, BaseInput, LabelLayout};
use crate::element::Element;

/// The `<input type="hidden">` widget.
///
/// Hidden inputs carry no generated id and no label.
#[derive(Debug, Clone)]
pub struct Hidden {
    base: BaseInput,
}

impl Hidden {
    /// Creates a hidden input.
    #[must_use]
    pub fn new() -> Self {
        let mut base = BaseInput::new("hidden", LabelLayout::Enclose);
        base.attrs.remove("id");

        Self { base }
    }
}

impl Default for Hidden {
    fn default() -> Self {
        Self::new()
    }
}

impl_input_mixins!(Hidden);

impl Element for Hidden {
    fn render(&self) -> String {
        self.base.render()
    }
}
