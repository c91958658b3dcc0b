//! Daily digest assembly.
//!
//! A [`Digest`] is the processed form of one run's [`Feeds`]: records are
//! filtered against the watchlist and blacklist, their text is cleaned, and
//! the survivors are sorted into the report's sections. Rendering lives in
//! [`render`] and works with any [`crate::format::Formatter`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Feeds + list   │    │     Digest      │    │     Report      │
//! │  (raw records)  │───▶│   (sections)    │───▶│    (String)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!        build()               render()
//! ```

use jiff::civil::Date;
use log::{debug, warn};

use crate::{
    client::Feeds,
    models::{Announcement, CorporateAction, ResultEntry},
    processor::{clean_dividend_action, clean_headline, parse_complaints, RecordFilter},
    watchlist::Watchlist,
};

pub mod render;

#[cfg(test)]
mod tests;

/// A cleaned announcement ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementItem {
    pub symbol: String,
    pub category: String,
    pub subject: String,
    pub headline: String,
    pub attachment: Option<String>,
}

/// A corporate action row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    pub name: String,
    pub purpose: String,
    pub ex_date: Option<Date>,
}

/// A result calendar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub name: String,
    pub meeting_date: String,
}

/// The processed content of one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub date: Date,
    pub announcements: Vec<AnnouncementItem>,
    pub results: Vec<ResultItem>,
    /// Actions on watchlist symbols
    pub portfolio_actions: Vec<ActionItem>,
    /// Bonus issues and splits elsewhere on the exchange
    pub other_actions: Vec<ActionItem>,
}

impl Digest {
    /// Filter and clean fetched records into report sections.
    pub fn build(date: Date, watchlist: &Watchlist, feeds: Feeds, filter: &RecordFilter) -> Self {
        let Feeds {
            announcements,
            actions,
            results,
        } = feeds;

        let results = results
            .into_iter()
            .filter(|entry| watchlist.contains(&entry.code))
            .map(ResultItem::from)
            .collect();

        let announcements = announcements
            .into_iter()
            .filter_map(|ann| process_announcement(ann, watchlist, filter))
            .collect();

        let mut portfolio_actions = Vec::new();
        let mut other_actions = Vec::new();

        for action in actions {
            let in_watchlist = watchlist.contains(&action.code);
            let item = ActionItem::from(action);

            if in_watchlist {
                portfolio_actions.push(item);
            } else if is_bonus_or_split(&item.purpose) {
                other_actions.push(item);
            }
        }

        Self {
            date,
            announcements,
            results,
            portfolio_actions,
            other_actions,
        }
    }
}

fn process_announcement(
    ann: Announcement,
    watchlist: &Watchlist,
    filter: &RecordFilter,
) -> Option<AnnouncementItem> {
    let Some(symbol) = watchlist.symbol(&ann.code) else {
        warn!("Skipping announcement for unknown scrip code '{}'", ann.code);
        return None;
    };

    let Some(category) = ann.category else {
        debug!("Skipping uncategorised announcement: {}", ann.subject);
        return None;
    };

    if filter.is_blacklisted(&ann.subcategory) {
        debug!("Skipping blacklisted '{}' announcement for {symbol}", ann.subcategory);
        return None;
    }

    let subject = filter.trim_subject(&ann.subject);
    let headline = if subject.to_lowercase().contains("investor complaints") {
        parse_complaints(&ann.headline)
    } else {
        clean_headline(&ann.headline)
    };

    Some(AnnouncementItem {
        symbol: symbol.to_string(),
        category,
        subject,
        headline,
        attachment: ann.attachment,
    })
}

fn is_bonus_or_split(purpose: &str) -> bool {
    let purpose = purpose.to_lowercase();
    purpose.contains("bonus") || purpose.contains("split")
}

impl From<CorporateAction> for ActionItem {
    fn from(action: CorporateAction) -> Self {
        let ex_date = action.parsed_ex_date();
        let purpose = if action.purpose.to_lowercase().contains("dividend") {
            clean_dividend_action(&action.purpose)
        } else {
            action.purpose
        };

        Self {
            name: action.short_name,
            purpose,
            ex_date,
        }
    }
}

impl From<ResultEntry> for ResultItem {
    fn from(entry: ResultEntry) -> Self {
        Self {
            name: entry.short_name,
            meeting_date: entry.meeting_date,
        }
    }
}
