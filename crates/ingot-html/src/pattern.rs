//! Regular-expression normalization for the HTML `pattern` attribute.

use regex::Regex;

use crate::error::{HtmlError, Result};

/// Normalizes a PCRE-style regular expression for the `pattern` attribute:
/// `\x{FFFF}` escapes become `\uFFFF`, the delimiters and any trailing
/// flags are removed.
///
/// ```
/// use ingot_html::normalize_regexp_pattern;
///
/// let pattern = normalize_regexp_pattern("/([a-z0-9-]+)/im", None).unwrap();
/// assert_eq!(pattern, "([a-z0-9-]+)");
/// ```
///
/// # Errors
///
/// Returns [`HtmlError::Configuration`] when the expression is too short,
/// has no closing delimiter, or the explicit delimiter is not one character.
pub fn normalize_regexp_pattern(regexp: &str, delimiter: Option<&str>) -> Result<String> {
    if regexp.chars().count() < 2 {
        return Err(HtmlError::Configuration(String::from(
            "incorrect regular expression",
        )));
    }

    let unicode_escape = Regex::new(r"\\x\{?([0-9a-fA-F]+)\}?").unwrap();
    let converted = unicode_escape.replace_all(regexp, r"\u$1").into_owned();

    let delimiter = match delimiter {
        None => converted.chars().next().map(String::from),
        Some(d) if d.chars().count() == 1 => Some(String::from(d)),
        Some(_) => {
            return Err(HtmlError::Configuration(String::from("incorrect delimiter")));
        }
    }
    .unwrap_or_default();

    let start = delimiter.len().min(converted.len());
    let end = converted[start..]
        .rfind(&delimiter)
        .map(|index| start + index)
        .ok_or_else(|| HtmlError::Configuration(String::from("incorrect regular expression")))?;

    Ok(String::from(&converted[start..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_delimiters_and_flags() {
        assert_eq!(
            normalize_regexp_pattern("/([a-z0-9-]+)/im", None).unwrap(),
            "([a-z0-9-]+)"
        );
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(
            normalize_regexp_pattern("~[a-z]+~", Some("~")).unwrap(),
            "[a-z]+"
        );
    }

    #[test]
    fn test_unicode_escapes_converted() {
        assert_eq!(
            normalize_regexp_pattern(r"/[\x{0410}-\x{042F}]/u", None).unwrap(),
            r"[\u0410-\u042F]"
        );
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(normalize_regexp_pattern("/", None).is_err());
    }

    #[test]
    fn test_missing_closing_delimiter_rejected() {
        assert!(normalize_regexp_pattern("/abc", None).is_err());
    }

    #[test]
    fn test_multichar_delimiter_rejected() {
        assert!(normalize_regexp_pattern("/abc/", Some("//")).is_err());
    }
}
