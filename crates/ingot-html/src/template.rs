//! Template token expansion.

/// Expands `{token}` placeholders against a token map.
///
/// Tokens present in the map are substituted verbatim; unknown tokens are
/// left as literal text. Substituted values are not re-scanned, so there is
/// no recursive expansion.
#[must_use]
pub fn expand(template: &str, tokens: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match tail.find('}') {
            Some(end) => {
                let name = &tail[1..end];
                let is_token = !name.is_empty()
                    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

                match tokens.iter().find(|(token, _)| is_token && *token == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(tail);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Joins the non-empty parts with newlines.
///
/// Widgets use this to assemble pre-rendered fragments before (or instead
/// of) template expansion; empty fragments leave no blank lines behind.
#[must_use]
pub fn join_lines<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens_substituted() {
        let out = expand("{prefix}{tag}{suffix}", &[("tag", "<input>"), ("suffix", "\ns")]);
        assert_eq!(out, "{prefix}<input>\ns");
    }

    #[test]
    fn test_unknown_token_left_literal() {
        assert_eq!(expand("{tag}{x}", &[("tag", "A")]), "A{x}");
    }

    #[test]
    fn test_no_recursive_expansion() {
        assert_eq!(expand("{tag}", &[("tag", "{suffix}"), ("suffix", "S")]), "{suffix}");
    }

    #[test]
    fn test_unterminated_brace_kept() {
        assert_eq!(expand("a{tag", &[("tag", "A")]), "a{tag");
    }

    #[test]
    fn test_non_token_braces_kept() {
        assert_eq!(expand("{a b}", &[]), "{a b}");
    }

    #[test]
    fn test_join_lines_skips_empty() {
        assert_eq!(join_lines(["a", "", "b"]), "a\nb");
        assert_eq!(join_lines(["", ""]), "");
    }
}
