//! Markup text helpers shared by the renderers.
//!
//! - [`escape_html`] / [`push_escaped`]: HTML escaping for text and attribute values
//! - [`is_void_element`]: Membership test for the HTML void element set

use std::borrow::Cow;

/// Tags that never have children and always self-close when serialized.
pub const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Returns `true` if `tag` is a void element.
///
/// Tag names are compared ASCII case-insensitively.
///
/// # Examples
///
/// ```
/// # use element_model_core::markup::is_void_element;
/// assert!(is_void_element("br"));
/// assert!(is_void_element("IMG"));
/// assert!(!is_void_element("div"));
/// ```
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag))
}

fn needs_escape(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\'')
}

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Examples
///
/// ```
/// # use element_model_core::markup::escape_html;
/// assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(escape_html("it's"), "it&#039;s");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if text.chars().any(needs_escape) {
        let mut escaped = String::with_capacity(text.len() + 16);
        push_escaped(&mut escaped, text);
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(text)
    }
}

/// Appends the escaped form of `text` to `out`.
pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
}
