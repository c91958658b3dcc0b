//! Rendering a [`Digest`] through a [`Formatter`].

use super::Digest;
use crate::format::{Formatter, LongDate, TableKind};

impl Digest {
    /// Render the full report.
    ///
    /// Sections appear in a fixed order: announcements, result calendar
    /// (only when non-empty), then portfolio and other corporate actions.
    /// The formatter is reset first, so one instance can render many reports.
    pub fn render(&self, fmt: &mut dyn Formatter) -> String {
        fmt.reset();
        let mut out = String::new();

        out.push_str(&fmt.main_heading(&format!(
            "CORP. ANNOUNCEMENTS - {}",
            LongDate(self.date)
        )));
        out.push('\n');

        if self.announcements.is_empty() {
            out.push_str(&fmt.empty("No announcements to display."));
        } else {
            for ann in &self.announcements {
                out.push_str(&fmt.heading(&ann.symbol, &ann.category));
                out.push_str(&fmt.subject(&ann.subject, &ann.headline));
                if let Some(attachment) = &ann.attachment {
                    out.push_str(&fmt.url(attachment));
                }
                out.push_str(&fmt.hr());
            }
        }
        out.push('\n');

        if !self.results.is_empty() {
            out.push_str(&fmt.main_heading("Result Calendar"));
            out.push('\n');
            for result in &self.results {
                out.push_str(&fmt.row(
                    TableKind::ResultCalendar,
                    &result.name,
                    &result.meeting_date,
                    None,
                ));
            }
            out.push('\n');
        }

        out.push_str(&fmt.main_heading("Corporate Actions"));
        out.push('\n');

        if self.portfolio_actions.is_empty() {
            out.push_str(&fmt.empty("No actions on Portfolio"));
        } else {
            out.push_str(&fmt.sub_heading("Portfolio"));
            out.push('\n');
            for action in &self.portfolio_actions {
                out.push_str(&fmt.row(
                    TableKind::Dividend,
                    &action.name,
                    &action.purpose,
                    action.ex_date,
                ));
            }
        }
        out.push('\n');

        if !self.other_actions.is_empty() {
            out.push_str(&fmt.sub_heading("Other Corp. Actions"));
            out.push('\n');
            for action in &self.other_actions {
                out.push_str(&fmt.row(
                    TableKind::BonusSplit,
                    &action.name,
                    &action.purpose,
                    action.ex_date,
                ));
            }
            out.push('\n');
        }

        fmt.document(out)
    }
}
