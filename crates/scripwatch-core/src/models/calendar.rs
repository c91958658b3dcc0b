use serde::{Deserialize, Serialize};

use super::de;

/// An upcoming board meeting to consider financial results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(rename = "scrip_Code", deserialize_with = "de::code", default)]
    pub code: String,
    #[serde(rename = "short_name", deserialize_with = "de::text", default)]
    pub short_name: String,
    #[serde(rename = "meeting_date", deserialize_with = "de::text", default)]
    pub meeting_date: String,
}
