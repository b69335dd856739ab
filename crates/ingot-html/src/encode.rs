//! HTML escaping and content encoding.

/// Escapes HTML special characters.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(ch),
        }
    }
    result
}

/// A content fragment fed to the encoder.
///
/// `Text` fragments are escaped; `Raw` fragments are already-rendered HTML
/// (typically a widget's output) and pass through untouched, so rendered
/// markup is never double-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text, escaped on encoding.
    Text(String),
    /// Pre-rendered HTML, trusted as-is.
    Raw(String),
}

impl Content {
    /// Creates a plain-text fragment.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a pre-rendered fragment.
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Concatenates content fragments, escaping the plain-text ones.
#[must_use]
pub fn encode<I>(parts: I) -> String
where
    I: IntoIterator<Item = Content>,
{
    let mut out = String::new();
    for part in parts {
        match part {
            Content::Text(text) => out.push_str(&escape(&text)),
            Content::Raw(html) => out.push_str(&html),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("\"test\""), "&quot;test&quot;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("it's"), "it&#x27;s");
    }

    #[test]
    fn test_encode_escapes_text_only() {
        let out = encode([Content::raw("<span></span>"), Content::text("foo && bar")]);
        assert_eq!(out, "<span></span>foo &amp;&amp; bar");
    }

    #[test]
    fn test_encode_keeps_order() {
        let out = encode([Content::text("foo && bar"), Content::raw("<span></span>")]);
        assert_eq!(out, "foo &amp;&amp; bar<span></span>");
    }

    #[test]
    fn test_raw_not_double_escaped() {
        let rendered = encode([Content::text("&")]);
        assert_eq!(encode([Content::raw(rendered)]), "&amp;");
    }
}
