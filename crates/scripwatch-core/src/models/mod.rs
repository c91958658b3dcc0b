//! Records fetched from the exchange feeds.
//!
//! These types mirror the JSON payloads of the BSE API closely. Field names
//! are mapped through serde renames, and [`de`] smooths over the feeds'
//! inconsistent typing (numeric vs string codes, `null` text fields).
//!
//! Records are ephemeral: fetched once per run, cleaned by the
//! [`crate::processor`] functions, and rendered through a
//! [`crate::format::Formatter`]. Nothing here is persisted.
//!
//! # Examples
//!
//! ```rust
//! use scripwatch_core::models::Announcement;
//!
//! let json = r#"{
//!     "SCRIP_CD": 500325,
//!     "CATEGORYNAME": "Company Update",
//!     "SUBCATNAME": "General",
//!     "NEWSSUB": "Reliance Industries Ltd - Press Release",
//!     "HEADLINE": "Press release<BR>",
//!     "ATTACHMENTNAME": null
//! }"#;
//!
//! let ann: Announcement = serde_json::from_str(json).unwrap();
//! assert_eq!(ann.code, "500325");
//! assert!(ann.attachment.is_none());
//! ```

pub mod action;
pub mod announcement;
pub mod calendar;
pub mod de;


pub use action::{CorporateAction, EXCHANGE_DATE_FORMAT};
pub use announcement::{Announcement, AnnouncementPage};
pub use calendar::ResultEntry;
