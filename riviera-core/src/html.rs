use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is a valid regex"));

/// Escape text for insertion into HTML: `&`, `<`, `>` and `"`.
///
/// Ampersands are replaced first, so escaping twice escapes the entities
/// produced by the first pass.
pub fn escape(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// Expand `**bold**` spans into `<strong>` elements.
///
/// The input is inserted as-is: callers pass authored, already-resolved text
/// and any markup in it survives.
pub fn expand_bold(text: &str, strong_style: Option<&str>) -> String {
    let replacement = match strong_style {
        Some(style) => format!("<strong style=\"{style}\">${{1}}</strong>"),
        None => "<strong>${1}</strong>".to_string(),
    };
    BOLD.replace_all(text, replacement.as_str()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_four_significant_characters() {
        assert_eq!(
            escape(r#"<a href="x">Fish & Chips</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Fish &amp; Chips&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_single_quotes_alone() {
        assert_eq!(escape("l'été"), "l'été");
    }

    #[test]
    fn escaping_twice_re_escapes_entities() {
        assert_eq!(escape(&escape("&")), "&amp;amp;");
        assert_eq!(escape(&escape("<")), "&amp;lt;");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn bold_spans_become_strong() {
        assert_eq!(
            expand_bold("Take the **train** not the **car**", None),
            "Take the <strong>train</strong> not the <strong>car</strong>"
        );
    }

    #[test]
    fn bold_uses_style_when_given() {
        assert_eq!(
            expand_bold("**Tip**", Some("color:#0a1628")),
            "<strong style=\"color:#0a1628\">Tip</strong>"
        );
    }

    #[test]
    fn unmatched_markers_are_left_alone() {
        assert_eq!(expand_bold("a **b", None), "a **b");
    }
}
