//! Plain-text formatter.

use jiff::civil::Date;

use super::{attachment_url, Formatter, ShortDate, TableKind};

/// Unadorned text with left-justified 15/40 column rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn main_heading(&self, text: &str) -> String {
        text.to_string()
    }

    fn sub_heading(&self, text: &str) -> String {
        text.to_string()
    }

    fn heading(&self, symbol: &str, category: &str) -> String {
        format!("{} - {category}\n", symbol.to_uppercase())
    }

    fn subject(&self, subject: &str, headline: &str) -> String {
        format!("{subject}\n{headline}")
    }

    fn url(&self, filename: &str) -> String {
        format!("\n{}", attachment_url(filename))
    }

    fn hr(&self) -> String {
        format!("\n{}\n\n", "-".repeat(70))
    }

    fn row(&mut self, _table: TableKind, key: &str, value: &str, date: Option<Date>) -> String {
        let mut line = format!("{:<15}{:<40}", format!("{key}:"), value);
        if let Some(date) = date {
            line.push_str(&ShortDate(date).to_string());
        }
        line.push('\n');
        line
    }
}
