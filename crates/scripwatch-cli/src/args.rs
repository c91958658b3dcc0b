use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jiff::civil::Date;
use scripwatch_core::{FormatKind, ReportDate};

/// Daily digest of BSE corporate filings for a watchlist of stocks
///
/// Fetches the day's corporate announcements, the upcoming result calendar
/// and corporate actions from the exchange, keeps what concerns the
/// watchlist and prints a single report.
#[derive(Parser, Debug)]
#[command(version, about, name = "scripwatch")]
pub struct Args {
    /// Report on N days before today (1 if no value given)
    #[arg(
        short,
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "1",
        conflicts_with = "date"
    )]
    pub prev: Option<u32>,

    /// Report on a specific date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<Date>,

    /// Output format. Defaults to color on a terminal, txt otherwise
    #[arg(long = "fmt", value_enum)]
    pub format: Option<FormatArg>,

    /// Newline-delimited list of symbols to (re)generate the watchlist from
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Path to the watchlist file. Defaults to
    /// $XDG_DATA_HOME/scripwatch/watchlist.json
    #[arg(short, long, value_name = "PATH")]
    pub watchlist: Option<PathBuf>,

    /// Never pick the color format automatically
    #[arg(long)]
    pub no_color: bool,

    /// Base URL of the exchange API
    #[arg(long, hide = true)]
    pub api_url: Option<String>,
}

impl Args {
    /// Which day the report covers.
    pub fn report_date(&self) -> ReportDate {
        match (self.date, self.prev) {
            (Some(date), _) => ReportDate::On(date),
            (None, Some(days)) => ReportDate::DaysBack(days),
            (None, None) => ReportDate::Today,
        }
    }

    /// The requested format, or the automatic choice for the output target.
    pub fn format_kind(&self, stdout_is_terminal: bool) -> FormatKind {
        match self.format {
            Some(format) => format.into(),
            None if stdout_is_terminal && !self.no_color && self.out.is_none() => {
                FormatKind::Color
            }
            None => FormatKind::Text,
        }
    }
}

fn parse_date(s: &str) -> Result<Date, String> {
    s.parse::<Date>()
        .map_err(|e| format!("expected a YYYY-MM-DD date: {e}"))
}

/// Command-line representation of the output formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Plain text
    Txt,
    /// Markdown with tables
    Md,
    /// Standalone HTML page
    Html,
    /// ANSI colored text
    Color,
}

impl From<FormatArg> for FormatKind {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Txt => FormatKind::Text,
            FormatArg::Md => FormatKind::Markdown,
            FormatArg::Html => FormatKind::Html,
            FormatArg::Color => FormatKind::Color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use jiff::civil::date;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("scripwatch").chain(args.iter().copied()))
            .expect("Failed to parse arguments")
    }

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_prev_without_value() {
        assert_eq!(parse(&["-p"]).report_date(), ReportDate::DaysBack(1));
        assert_eq!(parse(&["-p", "3"]).report_date(), ReportDate::DaysBack(3));
        assert_eq!(parse(&[]).report_date(), ReportDate::Today);
    }

    #[test]
    fn test_explicit_date() {
        let args = parse(&["-d", "2025-10-24"]);
        assert_eq!(args.report_date(), ReportDate::On(date(2025, 10, 24)));
    }

    #[test]
    fn test_prev_conflicts_with_date() {
        let result = Args::try_parse_from(["scripwatch", "-p", "2", "-d", "2025-10-24"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_date() {
        assert!(Args::try_parse_from(["scripwatch", "-d", "24-10-2025"]).is_err());
    }

    #[test]
    fn test_format_selection() {
        assert_eq!(parse(&[]).format_kind(true), FormatKind::Color);
        assert_eq!(parse(&[]).format_kind(false), FormatKind::Text);
        assert_eq!(parse(&["--no-color"]).format_kind(true), FormatKind::Text);
        assert_eq!(parse(&["-o", "out.txt"]).format_kind(true), FormatKind::Text);
        assert_eq!(parse(&["--fmt", "md"]).format_kind(true), FormatKind::Markdown);
        assert_eq!(parse(&["--fmt", "color"]).format_kind(false), FormatKind::Color);
    }
}
