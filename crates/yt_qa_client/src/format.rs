//! Answer text to markup: line breaks, `**bold**`, `*italic*`, plus HTML escaping.

use std::sync::OnceLock;

use regex::Regex;

fn bold_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold pattern"))
}

fn italic_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("valid italic pattern"))
}

/// Convert line breaks to `<br>`, `**x**` to `<strong>`, then `*x*` to `<em>`.
///
/// Does not escape. Unmatched delimiters are left as they are. Runs of three
/// stars are not balanced: `***x***` yields `<strong><em>x</strong></em>`.
pub fn format(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\n', "<br>");
    let text = bold_pattern().replace_all(&text, "<strong>$1</strong>");
    italic_pattern()
        .replace_all(&text, "<em>$1</em>")
        .into_owned()
}

/// Escape markup-significant characters so `text` is inert inside element content
/// and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for a backend-supplied answer: escaped first, then formatted.
pub fn render_answer(text: &str) -> String {
    format(&escape_html(text))
}
