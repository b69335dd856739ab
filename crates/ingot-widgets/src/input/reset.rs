//! Reset button widget.

use super::{impl_input_mixins, BaseInput, LabelLayout};
use crate::element::Element;

/// The `<input type="reset">` widget.
///
/// The label renders before the input and the outer container is enabled
/// by default, as for the other form-control buttons.
#[derive(Debug, Clone)]
pub struct Reset {
    base: BaseInput,
}

impl Reset {
    /// Creates a reset button with a generated id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: BaseInput::new("reset", LabelLayout::Stacked),
        }
    }
}

impl Default for Reset {
    fn default() -> Self {
        Self::new()
    }
}

impl_input_mixins!(Reset);

impl Element for Reset {
    fn render(&self) -> String {
        self.base.render()
    }
}
