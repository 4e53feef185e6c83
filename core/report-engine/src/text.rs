//! FILENAME: core/report-engine/src/text.rs
//! Label text extraction.
//!
//! Report cells used as labels sometimes carry markup (a link to a detail
//! page, say). The engines never parse markup themselves; the host supplies
//! a `LabelText` implementation that turns a raw cell into display text.

/// Turns raw label content into plain display text.
pub trait LabelText {
    fn text(&self, raw: &str) -> String;
}

/// Uses label content verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl LabelText for PlainText {
    fn text(&self, raw: &str) -> String {
        raw.to_string()
    }
}
