//! Error types for tag rendering and widget configuration.

use thiserror::Error;

/// Errors raised while configuring or rendering HTML elements.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// A constrained setter received a value outside its allowed set.
    #[error("the {attribute} attribute must be one of the following values: {allowed}")]
    InvalidAttributeValue {
        /// Attribute (or tag property) that rejected the value.
        attribute: String,
        /// Human-readable list of accepted values.
        allowed: String,
    },

    /// The widget's fields are inconsistent at render time.
    #[error("invalid widget configuration: {0}")]
    Configuration(String),

    /// An SVG source file could not be read or parsed.
    #[error("failed to load SVG file {path}: {reason}")]
    SvgLoad {
        /// Path passed to the widget.
        path: String,
        /// What went wrong while reading or parsing.
        reason: String,
    },
}

impl HtmlError {
    /// Builds an [`HtmlError::InvalidAttributeValue`] from an allowed-value list.
    pub fn invalid_value(attribute: &str, allowed: &[&str]) -> Self {
        Self::InvalidAttributeValue {
            attribute: attribute.to_string(),
            allowed: allowed.join(", "),
        }
    }
}

/// Result type alias for fallible builder and render operations.
pub type Result<T> = std::result::Result<T, HtmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_names_allowed_values() {
        let err = HtmlError::invalid_value("formmethod", &["\"GET\"", "\"POST\""]);
        assert_eq!(
            err.to_string(),
            "the formmethod attribute must be one of the following values: \"GET\", \"POST\""
        );
    }

    #[test]
    fn test_svg_load_message() {
        let err = HtmlError::SvgLoad {
            path: "icon.svg".to_string(),
            reason: "no <svg> element found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load SVG file icon.svg: no <svg> element found"
        );
    }
}
