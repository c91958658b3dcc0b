//! Parameter structures shared between interfaces.
//!
//! These stay free of CLI framework derives; the binary converts its clap
//! arguments into them.

use jiff::{civil::Date, Span};

use crate::error::{DigestError, Result};

/// Which day the digest covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportDate {
    #[default]
    Today,
    /// N days before today
    DaysBack(u32),
    /// A specific calendar date
    On(Date),
}

impl ReportDate {
    /// Resolve against `today`.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::InvalidInput` if the date lies after `today` or
    /// the offset leaves the supported calendar range
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use scripwatch_core::params::ReportDate;
    ///
    /// let today = date(2025, 10, 24);
    /// assert_eq!(ReportDate::DaysBack(1).resolve(today).unwrap(), date(2025, 10, 23));
    /// assert!(ReportDate::On(date(2025, 10, 25)).resolve(today).is_err());
    /// ```
    pub fn resolve(self, today: Date) -> Result<Date> {
        match self {
            Self::Today => Ok(today),
            Self::DaysBack(days) => Span::new()
                .try_days(i64::from(days))
                .and_then(|span| today.checked_sub(span))
                .map_err(|e| DigestError::invalid_input("prev").with_reason(e.to_string())),
            Self::On(date) if date > today => Err(DigestError::invalid_input("date")
                .with_reason(format!("{date} is after today ({today})"))),
            Self::On(date) => Ok(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_today() {
        let today = date(2025, 10, 24);
        assert_eq!(ReportDate::Today.resolve(today).unwrap(), today);
        assert_eq!(ReportDate::default(), ReportDate::Today);
    }

    #[test]
    fn test_days_back_crosses_month() {
        let today = date(2025, 3, 1);
        assert_eq!(
            ReportDate::DaysBack(1).resolve(today).unwrap(),
            date(2025, 2, 28)
        );
        assert_eq!(
            ReportDate::DaysBack(0).resolve(today).unwrap(),
            today
        );
    }

    #[test]
    fn test_specific_date() {
        let today = date(2025, 10, 24);
        assert_eq!(
            ReportDate::On(date(2025, 1, 15)).resolve(today).unwrap(),
            date(2025, 1, 15)
        );
        assert_eq!(ReportDate::On(today).resolve(today).unwrap(), today);
    }

    #[test]
    fn test_future_date_rejected() {
        let today = date(2025, 10, 24);
        let err = ReportDate::On(date(2025, 10, 25)).resolve(today).unwrap_err();
        assert!(matches!(err, DigestError::InvalidInput { ref field, .. } if field == "date"));
    }

    #[test]
    fn test_days_back_out_of_range() {
        let err = ReportDate::DaysBack(u32::MAX).resolve(date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, DigestError::InvalidInput { ref field, .. } if field == "prev"));
    }
}
