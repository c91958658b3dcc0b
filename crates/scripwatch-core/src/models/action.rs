use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::de;

/// Date layout used by the exchange for ex-dates and meeting dates.
pub const EXCHANGE_DATE_FORMAT: &str = "%d %b %Y";

/// A scheduled corporate action (dividend, bonus, split, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateAction {
    #[serde(rename = "scrip_code", deserialize_with = "de::code", default)]
    pub code: String,
    #[serde(rename = "short_name", deserialize_with = "de::text", default)]
    pub short_name: String,
    #[serde(rename = "Purpose", deserialize_with = "de::text", default)]
    pub purpose: String,
    #[serde(rename = "Ex_date", deserialize_with = "de::optional_text", default)]
    pub ex_date: Option<String>,
}

impl CorporateAction {
    /// The ex-date as a calendar date, when it is present and well formed.
    pub fn parsed_ex_date(&self) -> Option<Date> {
        self.ex_date
            .as_deref()
            .and_then(|raw| Date::strptime(EXCHANGE_DATE_FORMAT, raw).ok())
    }
}
