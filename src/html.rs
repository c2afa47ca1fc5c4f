//! Escaping and trust helpers for interpolating attrs into markup.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Quoted CSS `url()` for use inside a `style` attribute.
///
/// CSS escapes keep the value inside its string after the browser decodes the
/// attribute, and the result is then HTML-escaped for the attribute itself.
pub fn css_url(src: &str) -> String {
    let mut quoted = String::with_capacity(src.len() + 2);
    for c in src.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\27 "),
            '\n' => quoted.push_str("\\a "),
            '\r' => quoted.push_str("\\d "),
            _ => quoted.push(c),
        }
    }
    format!("url('{}')", escape_html(&quoted))
}

/// Remove every `<...>` tag, leaving text and entities untouched.
pub fn strip_tags(s: &str) -> String {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
    re.replace_all(s, "").into_owned()
}

/// Markup that is emitted verbatim.
///
/// Built with [`SafeHtml::trusted`] for rich-text attrs that the page builder
/// sanitizes before persisting, [`SafeHtml::text`] which escapes, or
/// [`SafeHtml::stripped`] which drops tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wrap content already sanitized upstream. No filtering happens here.
    pub fn trusted(html: impl Into<String>) -> Self {
        SafeHtml(html.into())
    }

    pub fn text(text: &str) -> Self {
        SafeHtml(escape_html(text))
    }

    /// Plain text with tags removed, for card bodies and quotes.
    ///
    /// Angle brackets left over from unterminated tags are escaped. Entities
    /// pass through unchanged.
    pub fn stripped(html: &str) -> Self {
        SafeHtml(strip_tags(html).replace('<', "&lt;").replace('>', "&gt;"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_css_url() {
        assert_eq!(css_url("/bg.jpg"), "url('/bg.jpg')");
        assert_eq!(css_url("a.jpg');color:red;x('"), "url('a.jpg\\27 );color:red;x(\\27 ')");
        assert_eq!(css_url("a\"b"), "url('a&quot;b')");
        assert_eq!(css_url("a\\b"), "url('a\\\\b')");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>bold</b> text"), "bold text");
        assert_eq!(strip_tags("<p class=\"x\">a</p><br/>b"), "ab");
        assert_eq!(strip_tags("Tom &amp; Jerry"), "Tom &amp; Jerry");
    }

    #[test]
    fn test_safe_html_constructors() {
        assert_eq!(SafeHtml::trusted("<p>x</p>").as_str(), "<p>x</p>");
        assert_eq!(SafeHtml::text("<p>").as_str(), "&lt;p&gt;");
        assert_eq!(SafeHtml::stripped("<i>hi</i>").to_string(), "hi");
    }

    #[test]
    fn test_stripped_escapes_unclosed_tags() {
        assert_eq!(
            SafeHtml::stripped("hi <img src=x onerror=alert(1)//").as_str(),
            "hi &lt;img src=x onerror=alert(1)//"
        );
        assert_eq!(SafeHtml::stripped("a > b <b>c</b>").as_str(), "a &gt; b c");
        assert_eq!(SafeHtml::stripped("Tom &amp; <em>Jerry</em>").as_str(), "Tom &amp; Jerry");
    }
}
