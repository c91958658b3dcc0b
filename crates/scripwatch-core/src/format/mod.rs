//! Report formatters.
//!
//! A [`Formatter`] turns individual record fields into string fragments that
//! are concatenated, in order, into the final digest. Variants differ only in
//! markup:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Digest      │    │    Formatter    │    │     Report      │
//! │   (sections)    │───▶│ (txt/color/md/  │───▶│    (String)     │
//! │                 │    │      html)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`plain`]: no markup, fixed-width columns
//! - [`color`]: plain layout wrapped in ANSI escape codes
//! - [`markdown`]: headings and pipe tables with lazily emitted headers
//! - [`html`]: escaped HTML fragments wrapped in a minimal page
//! - [`datetime`]: date display wrappers shared by all variants
//!
//! ## Usage
//!
//! ```rust
//! use scripwatch_core::format::{formatter, FormatKind, TableKind};
//!
//! let mut fmt = formatter(FormatKind::Markdown);
//! fmt.reset();
//! let first = fmt.row(TableKind::ResultCalendar, "INFY", "17 Oct 2025", None);
//! let second = fmt.row(TableKind::ResultCalendar, "TCS", "09 Oct 2025", None);
//! assert!(first.starts_with("| Company |"));
//! assert!(!second.contains("Company"));
//! ```

use std::{fmt, str::FromStr};

use jiff::civil::Date;

use crate::error::DigestError;

pub mod color;
pub mod datetime;
pub mod html;
pub mod markdown;
pub mod plain;


pub use color::ColorFormatter;
pub use datetime::{LongDate, ShortDate};
pub use html::HtmlFormatter;
pub use markdown::{MarkdownFormatter, TableHeaders};
pub use plain::TextFormatter;

/// Where corporate filing attachments are served from.
pub const ATTACHMENT_BASE_URL: &str = "https://www.bseindia.com/xml-data/corpfiling/AttachLive";

/// Full URL of an announcement attachment.
pub fn attachment_url(filename: &str) -> String {
    format!("{ATTACHMENT_BASE_URL}/{filename}")
}

/// The tables a key/value row can belong to.
///
/// Only the Markdown formatter distinguishes them; the others render every
/// row the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Corporate actions on watchlist symbols (mostly dividends)
    Dividend,
    /// Bonus issues and stock splits outside the watchlist
    BonusSplit,
    /// Upcoming result board meetings
    ResultCalendar,
}

/// Renders digest fragments.
///
/// Every method returns a string meant to be appended to the report as-is.
/// `row` takes `&mut self` because some variants track which table headers
/// they have already written; call [`Formatter::reset`] before each report.
pub trait Formatter {
    /// Top-level section title.
    fn main_heading(&self, text: &str) -> String;

    /// Sub-section title.
    fn sub_heading(&self, text: &str) -> String;

    /// Announcement heading: upper-cased symbol and category.
    fn heading(&self, symbol: &str, category: &str) -> String;

    /// Announcement subject followed by its headline.
    fn subject(&self, subject: &str, headline: &str) -> String;

    /// Link to an announcement attachment.
    fn url(&self, filename: &str) -> String;

    /// Separator between announcements.
    fn hr(&self) -> String;

    /// Key/value row with an optional date.
    fn row(&mut self, table: TableKind, key: &str, value: &str, date: Option<Date>) -> String;

    /// Placeholder for a section with nothing in it.
    fn empty(&self, text: &str) -> String {
        format!("\t{text}\n")
    }

    /// Forget per-report state.
    fn reset(&mut self) {}

    /// Wrap the finished report body.
    fn document(&self, body: String) -> String {
        body
    }
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatKind {
    #[default]
    Text,
    Markdown,
    Html,
    Color,
}

impl FormatKind {
    /// The short name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKind {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "color" | "colour" => Ok(Self::Color),
            other => Err(DigestError::invalid_input("fmt")
                .with_reason(format!("unknown format '{other}', expected txt, md, html or color"))),
        }
    }
}

/// Build the formatter for an output format.
pub fn formatter(kind: FormatKind) -> Box<dyn Formatter> {
    match kind {
        FormatKind::Text => Box::new(TextFormatter),
        FormatKind::Markdown => Box::new(MarkdownFormatter::new()),
        FormatKind::Html => Box::new(HtmlFormatter),
        FormatKind::Color => Box::new(ColorFormatter),
    }
}
