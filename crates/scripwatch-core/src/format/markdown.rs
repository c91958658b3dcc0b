//! Markdown formatter.

use jiff::civil::Date;

use super::{attachment_url, Formatter, ShortDate, TableKind};

const ACTION_HEADER: &str = "| Symbol | Purpose | Ex-Date |\n| --- | --- | --- |\n";
const CALENDAR_HEADER: &str = "| Company | Meeting Date |\n| --- | --- |\n";

/// Which table headers have been written in the current report.
///
/// Each flag flips once per report, on the first row of its table, and only
/// [`TableHeaders::clear`] sets it back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableHeaders {
    pub dividend: bool,
    pub bonus_split: bool,
    pub result_calendar: bool,
}

impl TableHeaders {
    /// Mark the table's header as written, returning true if it was not yet.
    pub fn claim(&mut self, table: TableKind) -> bool {
        let flag = match table {
            TableKind::Dividend => &mut self.dividend,
            TableKind::BonusSplit => &mut self.bonus_split,
            TableKind::ResultCalendar => &mut self.result_calendar,
        };
        !std::mem::replace(flag, true)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Markdown headings with pipe tables for key/value rows.
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter {
    headers: TableHeaders,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

impl Formatter for MarkdownFormatter {
    fn main_heading(&self, text: &str) -> String {
        format!("## {text}")
    }

    fn sub_heading(&self, text: &str) -> String {
        format!("### {text}")
    }

    fn heading(&self, symbol: &str, category: &str) -> String {
        format!("#### {} - {category}\n", symbol.to_uppercase())
    }

    fn subject(&self, subject: &str, headline: &str) -> String {
        // hard line breaks keep multi-line headlines apart
        format!("**{subject}**\n\n{}", headline.replace('\n', "  \n"))
    }

    fn url(&self, filename: &str) -> String {
        format!("\n\n[{filename}]({})", attachment_url(filename))
    }

    fn hr(&self) -> String {
        "\n\n---\n\n".to_string()
    }

    fn row(&mut self, table: TableKind, key: &str, value: &str, date: Option<Date>) -> String {
        let mut out = String::new();

        if self.headers.claim(table) {
            out.push_str(match table {
                TableKind::ResultCalendar => CALENDAR_HEADER,
                TableKind::Dividend | TableKind::BonusSplit => ACTION_HEADER,
            });
        }

        match table {
            TableKind::ResultCalendar => {
                out.push_str(&format!("| {} | {} |\n", cell(key), cell(value)));
            }
            TableKind::Dividend | TableKind::BonusSplit => {
                let date = date.map(|d| ShortDate(d).to_string()).unwrap_or_default();
                out.push_str(&format!("| {} | {} | {date} |\n", cell(key), cell(value)));
            }
        }

        out
    }

    fn empty(&self, text: &str) -> String {
        format!("_{text}_\n")
    }

    fn reset(&mut self) {
        self.headers.clear();
    }
}
