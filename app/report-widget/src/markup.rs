//! FILENAME: app/report-widget/src/markup.rs
// PURPOSE: Label text for cells carrying HTML.
// CONTEXT: Report cells used as chart labels are often links to a detail
// page. The chart shows the link text only.

use once_cell::sync::Lazy;
use regex::Regex;

use report_engine::LabelText;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Strips tags and decodes the common entities.
/// Content that is nothing but markup is kept as it came.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupText;

impl LabelText for MarkupText {
    fn text(&self, raw: &str) -> String {
        if !raw.contains('<') && !raw.contains('&') {
            return raw.to_string();
        }

        let mut text = TAG.replace_all(raw, "").into_owned();
        // `&amp;` last so `&amp;lt;` stays `&lt;`
        for (entity, ch) in ENTITIES {
            if text.contains(entity) {
                text = text.replace(entity, ch);
            }
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            raw.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_text() {
        assert_eq!(MarkupText.text(r#"<a href="/client/7/">Acme &amp; Co</a>"#), "Acme & Co");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(MarkupText.text("  spaced  "), "  spaced  ");
        assert_eq!(MarkupText.text("a < b"), "a < b");
    }

    #[test]
    fn test_nested_markup() {
        assert_eq!(MarkupText.text("<b><i> North </i></b>"), "North");
    }

    #[test]
    fn test_markup_only_falls_back_to_raw() {
        assert_eq!(MarkupText.text("<br/>"), "<br/>");
    }
}
