//! HTML formatter.

use jiff::civil::Date;

use super::{attachment_url, Formatter, ShortDate, TableKind};

/// Escape text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
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

/// HTML fragments, wrapped into a standalone page by `document`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn main_heading(&self, text: &str) -> String {
        format!("<h1>{}</h1>", escape(text))
    }

    fn sub_heading(&self, text: &str) -> String {
        format!("<h2>{}</h2>", escape(text))
    }

    fn heading(&self, symbol: &str, category: &str) -> String {
        format!(
            "<h3>{} - {}</h3>\n",
            escape(&symbol.to_uppercase()),
            escape(category)
        )
    }

    fn subject(&self, subject: &str, headline: &str) -> String {
        let headline = escape(headline).replace('\n', "<br>\n");
        format!("<p><strong>{}</strong></p>\n<p>{headline}</p>", escape(subject))
    }

    fn url(&self, filename: &str) -> String {
        let url = escape(&attachment_url(filename));
        format!("\n<p><a href=\"{url}\">{}</a></p>", escape(filename))
    }

    fn hr(&self) -> String {
        "\n<hr>\n".to_string()
    }

    fn row(&mut self, _table: TableKind, key: &str, value: &str, date: Option<Date>) -> String {
        let date = date
            .map(|d| format!(" <time>{}</time>", ShortDate(d)))
            .unwrap_or_default();
        format!(
            "<p><strong>{}:</strong> {}{date}</p>\n",
            escape(key),
            escape(value)
        )
    }

    fn empty(&self, text: &str) -> String {
        format!("<p><em>{}</em></p>\n", escape(text))
    }

    fn document(&self, body: String) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Corporate Announcements</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
        )
    }
}
