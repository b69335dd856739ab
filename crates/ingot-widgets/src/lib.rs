//! # ingot-widgets
//!
//! Fluent, immutable HTML widgets built on [`ingot_html`].
//!
//! This crate provides:
//! - Form control widgets (`<input>` variants, `<form>`, `<label>`)
//! - Document tags (`<a>`, `<span>`, `<header>`, `<meta>`, lists)
//! - An `<svg>` widget that loads and rewrites external files
//! - Composable attribute mixins shared across all widgets
//!
//! ## Quick Start
//!
//! ```rust
//! use ingot_html::Content;
//! use ingot_widgets::{Checkbox, Element, Form};
//! use ingot_widgets::mixin::{GlobalAttrs, HasLabel, InputAttrs};
//!
//! let checkbox = Checkbox::new()
//!     .id(Some("agree"))
//!     .name("agree")
//!     .checked(true)
//!     .label_content([Content::text("I agree")]);
//!
//! assert_eq!(
//!     checkbox.render(),
//!     "<label for=\"agree\">\n<input id=\"agree\" name=\"agree\" type=\"checkbox\" checked>\nI agree\n</label>"
//! );
//!
//! let form = Form::new().action("/signup").method("post").unwrap();
//! assert_eq!(form.begin(), "<form action=\"/signup\" method=\"POST\">");
//! ```
//!
//! Every configuration method takes the widget by value and returns the
//! updated widget; cloning before configuring yields two independent
//! values.

mod element;
mod form;
mod input;
mod label;
mod list;
mod meta;
pub mod mixin;
mod svg;
mod tags;

pub use element::Element;
pub use form::Form;
pub use input::{Checkbox, Color, Date, Hidden, Number, Reset, Submit, Text, Time};
pub use label::Label;
pub use list::{Li, TagList};
pub use meta::Meta;
pub use svg::Svg;
pub use tags::{Header, Span, A};
