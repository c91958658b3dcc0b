//! Core library for the scripwatch corporate filings digest.
//!
//! This crate fetches a day's corporate announcements, corporate actions and
//! result calendar from the BSE API, filters them against a watchlist of
//! ticker symbols, and renders the outcome as a single report.
//!
//! # Architecture
//!
//! - **Client** ([`client`]): typed access to the exchange endpoints
//! - **Models** ([`models`]): serde records mirroring the feed payloads
//! - **Processor** ([`processor`]): stateless text cleanup and filtering
//! - **Digest** ([`digest`]): processed report sections
//! - **Formatters** ([`format`]): text, Markdown, HTML and ANSI color output
//!
//! Rendering is decoupled from processing, so the same [`Digest`] can be
//! rendered by any [`Formatter`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scripwatch_core::{
//!     fetch_feeds, formatter, ClientBuilder, Digest, FormatKind, RecordFilter, ReportDate,
//!     Watchlist,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let watchlist = Watchlist::load(&Watchlist::default_path()?)?;
//! let date = ReportDate::DaysBack(1).resolve(jiff::Zoned::now().date())?;
//!
//! let feeds = {
//!     let client = ClientBuilder::new().build()?;
//!     fetch_feeds(&client, &watchlist, date).await?
//! };
//!
//! let digest = Digest::build(date, &watchlist, feeds, &RecordFilter::default());
//! let mut fmt = formatter(FormatKind::Markdown);
//! println!("{}", digest.render(fmt.as_mut()));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod digest;
pub mod error;
pub mod format;
pub mod models;
pub mod params;
pub mod processor;
pub mod watchlist;

// Re-export commonly used types
pub use client::{fetch_feeds, seed_watchlist, BseClient, ClientBuilder, Feeds};
pub use digest::{ActionItem, AnnouncementItem, Digest, ResultItem};
pub use error::{DigestError, NetworkErrorKind, Result};
pub use format::{formatter, FormatKind, Formatter, TableKind};
pub use models::{Announcement, CorporateAction, ResultEntry};
pub use params::ReportDate;
pub use processor::RecordFilter;
pub use watchlist::{read_symbol_file, Watchlist};
