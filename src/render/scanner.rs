//! Single-pass `{{name}}` token scanner.
//!
//! The markup is walked once, left to right. Each `{{...}}` whose name the
//! lookup resolves is replaced; anything else is copied through verbatim.
//! When openers pile up (`{{{name}}}`), the one nearest the closing `}}`
//! starts the token.
//! Substituted values are never rescanned.

/// Opening delimiter of a token.
const OPEN: &str = "{{";
/// Closing delimiter of a token.
const CLOSE: &str = "}}";

/// Output of a substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Final markup.
    pub output: String,
    /// Token names left in the output, deduplicated, in first-seen order.
    pub unresolved: Vec<String>,
}

/// Replace every resolvable token in `markup`.
pub fn substitute<'v, F>(markup: &str, mut lookup: F) -> Rendered
where
    F: FnMut(&str) -> Option<&'v str>,
{
    let mut output = String::with_capacity(markup.len());
    let mut unresolved: Vec<String> = Vec::new();
    let mut rest = markup;

    while let Some(open) = rest.find(OPEN) {
        let after_open = open + OPEN.len();
        let Some(len) = rest[after_open..].find(CLOSE) else {
            // No closing delimiter anywhere after this point
            break;
        };
        let close = after_open + len;

        // Innermost opener before this close: `{{{name}}}` is `{` + `{{name}}` + `}`
        let start = rest[..close].rfind(OPEN).unwrap_or(open);
        let name = &rest[start + OPEN.len()..close];
        let end = close + CLOSE.len();

        output.push_str(&rest[..start]);
        match lookup(name) {
            Some(value) => output.push_str(value),
            None => {
                if !name.is_empty() && !unresolved.iter().any(|n| n == name) {
                    unresolved.push(name.to_owned());
                }
                output.push_str(&rest[start..end]);
            }
        }
        rest = &rest[end..];
    }

    output.push_str(rest);
    Rendered { output, unresolved }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<&'static str> {
        match name {
            "name" => Some("Apex Air"),
            "tagline" => Some("The sky, yours alone."),
            "loop" => Some("{{name}}"),
            _ => None,
        }
    }

    #[test]
    fn test_substitute_known_tokens() {
        let r = substitute("<h1>{{name}}</h1><p>{{tagline}}</p>", lookup);
        assert_eq!(r.output, "<h1>Apex Air</h1><p>The sky, yours alone.</p>");
        assert!(r.unresolved.is_empty());
    }

    #[test]
    fn test_substitute_repeated_token() {
        let r = substitute("{{name}} | {{name}}", lookup);
        assert_eq!(r.output, "Apex Air | Apex Air");
    }

    #[test]
    fn test_unknown_token_kept_verbatim() {
        let r = substitute("<b>{{phone}}</b> {{name}} {{phone}}", lookup);
        assert_eq!(r.output, "<b>{{phone}}</b> Apex Air {{phone}}");
        assert_eq!(r.unresolved, vec!["phone".to_string()]);
    }

    #[test]
    fn test_substituted_values_not_rescanned() {
        let r = substitute("<p>{{loop}}</p>", lookup);
        assert_eq!(r.output, "<p>{{name}}</p>");
        assert!(r.unresolved.is_empty());
    }

    #[test]
    fn test_token_names_are_exact() {
        let r = substitute("{{ name }}{{Name}}", lookup);
        assert_eq!(r.output, "{{ name }}{{Name}}");
        assert_eq!(r.unresolved, vec![" name ".to_string(), "Name".to_string()]);
    }

    #[test]
    fn test_unterminated_token() {
        let r = substitute("a {{name}} b {{name", lookup);
        assert_eq!(r.output, "a Apex Air b {{name");
        assert!(r.unresolved.is_empty());
    }

    #[test]
    fn test_nested_opener_resolves_inner_token() {
        let r = substitute("{{x {{name}}", lookup);
        assert_eq!(r.output, "{{x Apex Air");
        assert!(r.unresolved.is_empty());
    }

    #[test]
    fn test_extra_braces_around_token() {
        let r = substitute("{{{name}}}", lookup);
        assert_eq!(r.output, "{Apex Air}");
        assert!(r.unresolved.is_empty());

        let r = substitute("{{{{name}}}}", lookup);
        assert_eq!(r.output, "{{Apex Air}}");
        assert!(r.unresolved.is_empty());
    }

    #[test]
    fn test_extra_braces_around_unknown_token() {
        let r = substitute("{{{phone}}} {{{name}}}", lookup);
        assert_eq!(r.output, "{{{phone}}} {Apex Air}");
        assert_eq!(r.unresolved, vec!["phone".to_string()]);
    }

    #[test]
    fn test_empty_token_not_reported() {
        let r = substitute("{{}} {{name}}", lookup);
        assert_eq!(r.output, "{{}} Apex Air");
        assert!(r.unresolved.is_empty());
    }

    #[test]
    fn test_stray_close_before_token() {
        let r = substitute("a }} {{name}}", lookup);
        assert_eq!(r.output, "a }} Apex Air");
    }

    #[test]
    fn test_extra_closing_brace() {
        let r = substitute("{{name}}}", lookup);
        assert_eq!(r.output, "Apex Air}");
    }

    #[test]
    fn test_no_tokens() {
        let markup = "<style>a { color: red }</style>";
        let r = substitute(markup, lookup);
        assert_eq!(r.output, markup);
    }

    #[test]
    fn test_multibyte_text_around_tokens() {
        let r = substitute("« {{name}} » — ✈", lookup);
        assert_eq!(r.output, "« Apex Air » — ✈");
    }
}
