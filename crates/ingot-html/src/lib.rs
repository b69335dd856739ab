//! # ingot-html
//!
//! Low-level building blocks for fluent HTML generation.
//!
//! This crate provides:
//! - An ordered attribute bag with boolean/list attribute semantics
//! - HTML escaping and a content encoder that never double-escapes
//!   pre-rendered markup
//! - A tag renderer aware of void and block-level elements
//! - A `{token}` template expander
//! - CSS class merging and `pattern`-attribute normalization helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use ingot_html::{build, encode, Attributes, Content};
//!
//! let mut attrs = Attributes::new();
//! attrs.set("href", "/docs");
//! attrs.set("download", true);
//!
//! let content = encode([Content::text("read & learn")]);
//! assert_eq!(
//!     build("a", &content, &attrs),
//!     r#"<a href="/docs" download>read &amp; learn</a>"#
//! );
//! ```

pub mod attribute;
pub mod css;
pub mod encode;
mod error;
mod pattern;
pub mod tag;
pub mod template;

pub use attribute::{AttrValue, Attributes, IntoAttrValue};
pub use css::add_class;
pub use encode::{encode, escape, Content};
pub use error::{HtmlError, Result};
pub use pattern::normalize_regexp_pattern;
pub use tag::build;
pub use template::{expand, join_lines};
