//! Form-submission attributes with constrained value sets.

use ingot_html::{HtmlError, Result};

use super::Attributed;

/// Methods accepted by `method`/`formmethod`.
pub const METHOD_VALUES: &[&str] = &["GET", "POST"];

/// MIME types accepted by `enctype`/`formenctype`.
pub const ENCTYPE_VALUES: &[&str] = &[
    "multipart/form-data",
    "application/x-www-form-urlencoded",
    "text/plain",
];

/// Validates a form method, returning its canonical uppercase form.
///
/// # Errors
///
/// Returns [`HtmlError::InvalidAttributeValue`] naming `"GET"`/`"POST"`
/// when the value is anything else.
pub fn validate_method(attribute: &str, value: &str) -> Result<String> {
    let canonical = value.to_uppercase();
    if METHOD_VALUES.contains(&canonical.as_str()) {
        Ok(canonical)
    } else {
        Err(HtmlError::invalid_value(attribute, &["\"GET\"", "\"POST\""]))
    }
}

/// Validates a form encoding type.
///
/// # Errors
///
/// Returns [`HtmlError::InvalidAttributeValue`] naming the three valid
/// MIME types when the value is anything else.
pub fn validate_enctype(attribute: &str, value: &str) -> Result<()> {
    if ENCTYPE_VALUES.contains(&value) {
        Ok(())
    } else {
        Err(HtmlError::invalid_value(attribute, ENCTYPE_VALUES))
    }
}

/// Builder methods for submit controls.
pub trait SubmitAttrs: Attributed {
    /// Sets the `formaction` attribute.
    #[must_use]
    fn formaction(mut self, value: &str) -> Self {
        self.attrs_mut().set("formaction", value);
        self
    }

    /// Sets the `formenctype` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidAttributeValue`] unless the value is
    /// one of `multipart/form-data`, `application/x-www-form-urlencoded`,
    /// `text/plain`.
    fn formenctype(mut self, value: &str) -> Result<Self> {
        validate_enctype("formenctype", value)?;
        self.attrs_mut().set("formenctype", value);
        Ok(self)
    }

    /// Sets the `formmethod` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidAttributeValue`] unless the value is
    /// `GET` or `POST` (case-insensitive; stored uppercase).
    fn formmethod(mut self, value: &str) -> Result<Self> {
        let canonical = validate_method("formmethod", value)?;
        self.attrs_mut().set("formmethod", canonical);
        Ok(self)
    }
}
