use serde::{Deserialize, Serialize};

use super::de;

/// A corporate filing announcement as published by the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(rename = "SCRIP_CD", deserialize_with = "de::code", default)]
    pub code: String,
    #[serde(rename = "CATEGORYNAME", deserialize_with = "de::optional_text", default)]
    pub category: Option<String>,
    #[serde(rename = "SUBCATNAME", deserialize_with = "de::text", default)]
    pub subcategory: String,
    #[serde(rename = "NEWSSUB", deserialize_with = "de::text", default)]
    pub subject: String,
    /// Free text that may embed raw markup such as `<BR>` or complaint tables
    #[serde(rename = "HEADLINE", deserialize_with = "de::text", default)]
    pub headline: String,
    #[serde(rename = "ATTACHMENTNAME", deserialize_with = "de::optional_text", default)]
    pub attachment: Option<String>,
}

/// One page of the announcements feed.
///
/// `Table1` carries a single row with the total number of matching
/// announcements across all pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnouncementPage {
    #[serde(rename = "Table", default)]
    pub rows: Vec<Announcement>,
    #[serde(rename = "Table1", default)]
    pub totals: Vec<RowCount>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RowCount {
    #[serde(rename = "ROWCNT", default)]
    pub count: usize,
}

impl AnnouncementPage {
    /// Total announcements reported by the exchange, if present.
    pub fn total(&self) -> Option<usize> {
        self.totals.first().map(|t| t.count)
    }
}
