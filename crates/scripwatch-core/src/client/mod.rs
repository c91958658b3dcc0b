//! Exchange API client.
//!
//! [`BseClient`] wraps the handful of BSE endpoints the digest needs. Every
//! call is a plain awaited request; the digest awaits them one after another
//! and any failure aborts the run, so there is no retry logic here.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  ClientBuilder  │───▶│    BseClient    │───▶│   BSE JSON API  │
//! │ (url, timeout)  │    │ (typed records) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configuration and construction of [`BseClient`]
//! - [`feeds`]: the sequential fetch phase of a digest run
//! - [`search`]: scrip code extraction from the quick-search markup
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use scripwatch_core::client::ClientBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::new().build()?;
//! let code = client.scrip_code("INFY").await?;
//! let day = date(2025, 10, 24);
//! let announcements = client.announcements(day, day, &code).await?;
//! println!("{} announcements", announcements.len());
//! # Ok(())
//! # }
//! ```

use jiff::civil::Date;
use log::debug;
use serde::de::DeserializeOwned;

use crate::{
    error::{DigestError, Result},
    models::{Announcement, AnnouncementPage, CorporateAction, ResultEntry},
};

pub mod builder;
pub mod feeds;
pub mod search;

pub use builder::ClientBuilder;
pub use feeds::{fetch_feeds, seed_watchlist, Feeds};

/// Upper bound on announcement pages fetched for one symbol and date range.
pub const MAX_ANNOUNCEMENT_PAGES: u32 = 50;

const SEARCH_ENDPOINT: &str = "PeerSmartSearch/w";
const ACTIONS_ENDPOINT: &str = "DefaultData/w";
const RESULT_CALENDAR_ENDPOINT: &str = "Corpforthresults/w";
const ANNOUNCEMENTS_ENDPOINT: &str = "AnnSubCategoryGetData/w";

/// Session with the exchange API.
///
/// Holds the HTTP connection pool and cookie jar; dropping the client closes
/// the session.
#[derive(Debug)]
pub struct BseClient {
    http: reqwest::Client,
    api_url: String,
}

impl BseClient {
    pub(crate) fn new(http: reqwest::Client, api_url: String) -> Self {
        debug!("Opening exchange session at {api_url}");
        Self { http, api_url }
    }

    /// Base URL requests are sent to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.api_url)
    }

    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        let url = self.endpoint_url(endpoint);
        debug!("GET {url} {query:?}");

        self.http
            .get(&url)
            .query(query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| DigestError::network(endpoint).with_source(e))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        self.get(endpoint, query)
            .await?
            .json::<T>()
            .await
            .map_err(|e| DigestError::network(endpoint).with_source(e))
    }

    /// Look up the exchange code of a ticker symbol.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::ScripNotFound` if the search has no exact match
    /// Returns `DigestError::Network` on transport failures
    pub async fn scrip_code(&self, symbol: &str) -> Result<String> {
        let symbol = symbol.trim().to_uppercase();
        let body = self
            .get(SEARCH_ENDPOINT, &[("Type", "SS"), ("text", symbol.as_str())])
            .await?
            .text()
            .await
            .map_err(|e| DigestError::network(SEARCH_ENDPOINT).with_source(e))?;

        search::parse_scrip_code(&body, &symbol)
            .ok_or_else(|| DigestError::ScripNotFound { symbol })
    }

    /// Upcoming corporate actions across the equity segment.
    pub async fn actions(&self) -> Result<Vec<CorporateAction>> {
        let query = [
            ("Fdate", ""),
            ("Purposecode", ""),
            ("TDate", ""),
            ("ddlcategorys", "E"),
            ("ddlindustrys", ""),
            ("scripcode", ""),
            ("segment", "0"),
            ("strSearch", "S"),
        ];
        let actions: Option<Vec<CorporateAction>> = self.get_json(ACTIONS_ENDPOINT, &query).await?;
        Ok(actions.unwrap_or_default())
    }

    /// Upcoming board meetings for financial results.
    pub async fn result_calendar(&self) -> Result<Vec<ResultEntry>> {
        let query = [("fromdate", ""), ("scripcode", ""), ("todate", "")];
        let entries: Option<Vec<ResultEntry>> =
            self.get_json(RESULT_CALENDAR_ENDPOINT, &query).await?;
        Ok(entries.unwrap_or_default())
    }

    /// All announcements for a scrip code between two dates, inclusive.
    ///
    /// Follows pagination until the reported row count is reached, a page
    /// comes back empty, or [`MAX_ANNOUNCEMENT_PAGES`] pages have been read.
    pub async fn announcements(
        &self,
        from: Date,
        to: Date,
        scripcode: &str,
    ) -> Result<Vec<Announcement>> {
        let from = from.strftime("%Y%m%d").to_string();
        let to = to.strftime("%Y%m%d").to_string();
        let mut collected = Vec::new();

        for page_no in 1..=MAX_ANNOUNCEMENT_PAGES {
            let page_no = page_no.to_string();
            let query = [
                ("pageno", page_no.as_str()),
                ("strCat", "-1"),
                ("strPrevDate", from.as_str()),
                ("strScrip", scripcode),
                ("strSearch", "P"),
                ("strToDate", to.as_str()),
                ("strType", "C"),
                ("subcategory", "-1"),
            ];

            let page: AnnouncementPage = self.get_json(ANNOUNCEMENTS_ENDPOINT, &query).await?;
            let total = page.total();

            if page.rows.is_empty() {
                break;
            }
            collected.extend(page.rows);

            if total.map_or(true, |total| collected.len() >= total) {
                break;
            }
        }

        debug!("{} announcements for {scripcode}", collected.len());
        Ok(collected)
    }
}

impl Drop for BseClient {
    fn drop(&mut self) {
        debug!("Closing exchange session at {}", self.api_url);
    }
}
