//! Composable attribute and part mixins.
//!
//! Each trait carries default builder methods over a small accessor: a
//! widget exposes its attribute bag (or affix/container/label parts) and
//! picks the traits that make sense for its tag.

mod affix;
mod aria;
mod container;
mod form;
mod global;
mod input;
mod label;
mod template;

pub use affix::{Affix, HasAffixes};
pub use aria::AriaAttrs;
pub use container::{Container, HasContainer};
pub use form::{validate_enctype, validate_method, SubmitAttrs, ENCTYPE_VALUES, METHOD_VALUES};
pub use global::GlobalAttrs;
pub use input::{InputAttrs, RangeAttrs, TextAttrs};
pub use label::{HasLabel, LabelParts};
pub use template::HasTemplate;

use ingot_html::Attributes;

/// Accessor trait every attribute mixin builds on.
pub trait Attributed: Sized {
    /// Borrows the widget's attribute bag.
    fn attrs(&self) -> &Attributes;

    /// Mutably borrows the widget's attribute bag.
    fn attrs_mut(&mut self) -> &mut Attributes;
}
