//! Date display utilities.
//!
//! Newtype wrappers that give [`Date`] the layouts used in the digest via
//! the `Display` trait.

use std::fmt;

use jiff::civil::Date;

use crate::models::EXCHANGE_DATE_FORMAT;

/// Short form used on key/value rows, e.g. `24 Oct 2025`.
pub struct ShortDate(pub Date);

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(EXCHANGE_DATE_FORMAT))
    }
}

/// Long form used in the report title, e.g. `Friday 24 Oct 2025`.
pub struct LongDate(pub Date);

impl fmt::Display for LongDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%A %d %b %Y"))
    }
}
