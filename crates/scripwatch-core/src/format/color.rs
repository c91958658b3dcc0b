//! ANSI terminal formatter.

use jiff::civil::Date;

use super::{attachment_url, Formatter, ShortDate, TableKind};

const HEADER: &str = "\x1b[95m";
const CYAN: &str = "\x1b[96m";
const GREEN: &str = "\x1b[92m";
const BOLD: &str = "\x1b[1m";
const ENDC: &str = "\x1b[0m";

/// Plain layout wrapped in ANSI escape codes.
///
/// Row padding (25/48) is applied to the escaped strings, so the escape
/// bytes count towards the width.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorFormatter;

impl Formatter for ColorFormatter {
    fn main_heading(&self, text: &str) -> String {
        format!("{HEADER}{BOLD}{text}{ENDC}")
    }

    fn sub_heading(&self, text: &str) -> String {
        format!("{BOLD}{text}{ENDC}")
    }

    fn heading(&self, symbol: &str, category: &str) -> String {
        format!("{CYAN}{BOLD}{} - {category}{ENDC}\n", symbol.to_uppercase())
    }

    fn subject(&self, subject: &str, headline: &str) -> String {
        format!("{GREEN}{subject}{ENDC}\n{headline}{ENDC}")
    }

    fn url(&self, filename: &str) -> String {
        format!("\n{CYAN}{}{ENDC}", attachment_url(filename))
    }

    fn hr(&self) -> String {
        format!("\n{}\n\n", "-".repeat(70))
    }

    fn row(&mut self, _table: TableKind, key: &str, value: &str, date: Option<Date>) -> String {
        let mut line = format!(
            "{:<25}{:<48}",
            format!("{HEADER}{BOLD}{key}:"),
            format!("{GREEN}{value}{ENDC}")
        );
        if let Some(date) = date {
            line.push_str(&ShortDate(date).to_string());
        }
        line.push('\n');
        line
    }
}
