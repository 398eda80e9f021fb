//! HTML minification for rendered pages.
//!
//! Enabled by `[build] minify = true` or `vitrine build --minify`.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify rendered markup if enabled in config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(html: &'a str, config: &SiteConfig) -> Cow<'a, str> {
    if !config.build.minify {
        return Cow::Borrowed(html);
    }
    let bytes = minify_html_inner(html.as_bytes());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

/// Minify HTML content using `minify_html` crate.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    minify_html::minify(html, &cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    #[test]
    fn test_minify_html_basic() {
        let html = "<html>\n  <head>\n  </head>\n  <body>\n    <p>Hello</p>\n  </body>\n</html>";
        let result = minify(html, &config_with_minify(true));

        assert!(!result.contains("\n  "));
        assert!(result.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_minify_keeps_service_items() {
        let html = "<ul>\n          <li>Private event curation</li>\n          <li>White-glove relocation</li>\n</ul>";
        let result = minify(html, &config_with_minify(true));

        assert!(result.contains("<li>Private event curation</li>"));
        assert!(result.contains("<li>White-glove relocation</li>"));
    }

    #[test]
    fn test_minify_html_disabled() {
        let html = "<html>\n  <body>\n  </body>\n</html>";
        let result = minify(html, &config_with_minify(false));

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, html);
    }
}
