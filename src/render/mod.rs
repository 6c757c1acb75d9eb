//! Presentation - HTML page, result cards and charts
//!
//! Server-side rendering only. Nothing here makes decisions; it formats
//! what `crate::prediction` produced.

pub mod chart;
pub mod page;
pub mod theme;

pub use page::{render_error, render_page};

/// Escape text for HTML element content and attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("mean radius"), "mean radius");
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
