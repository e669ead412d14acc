//! Inclusive calendar date range
//!
//! Bookings and reservations both carry a `DateRange`: a closed interval
//! of calendar days, `[start, end]`. Clients submit the endpoints as
//! `dd/MM/yyyy` text.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::errors::DomainError;

/// Wire format for booking dates, e.g. `25/06/2024`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Closed interval of calendar days. Invariant: `start <= end`,
/// enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::Validation(format!(
                "date range ends before it starts: {} > {}",
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a `dd/MM/yyyy` endpoint pair as sent by clients.
    pub fn parse(from: &str, to: &str) -> Result<Self, DomainError> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when the two closed intervals share at least one day.
    /// Identical ranges and ranges touching on a single boundary day
    /// count as overlapping.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        other.start <= self.end && self.start <= other.end
    }

    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Parse a single `dd/MM/yyyy` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDateFormat(s.to_string()))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(from: (u32, u32), to: (u32, u32)) -> DateRange {
        DateRange::new(date(2024, from.1, from.0), date(2024, to.1, to.0)).unwrap()
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let a = range((10, 6), (15, 6));
        let b = range((16, 6), (20, 6));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn shared_days_overlap() {
        let a = range((10, 6), (15, 6));
        let b = range((14, 6), (18, 6));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn identical_ranges_overlap() {
        let a = range((10, 6), (15, 6));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn single_boundary_day_overlaps() {
        let a = range((10, 6), (15, 6));
        let b = range((15, 6), (20, 6));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn contained_range_overlaps() {
        let outer = range((1, 6), (30, 6));
        let inner = range((10, 6), (12, 6));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn single_day_range_is_valid() {
        let a = DateRange::new(date(2024, 6, 10), date(2024, 6, 10)).unwrap();
        assert_eq!(a.nights(), 0);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = DateRange::new(date(2024, 6, 20), date(2024, 6, 10)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn parse_valid_pair() {
        let r = DateRange::parse("10/06/2024", "15/06/2024").unwrap();
        assert_eq!(r.start(), date(2024, 6, 10));
        assert_eq!(r.end(), date(2024, 6, 15));
        assert_eq!(r.nights(), 5);
    }

    #[test]
    fn parse_rejects_wrong_separator() {
        let err = DateRange::parse("31-13-2024", "01/01/2025").unwrap_err();
        match err {
            DomainError::InvalidDateFormat(s) => assert_eq!(s, "31-13-2024"),
            other => panic!("expected InvalidDateFormat, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_impossible_date() {
        assert!(matches!(
            DateRange::parse("31/13/2024", "01/01/2025"),
            Err(DomainError::InvalidDateFormat(_))
        ));
        assert!(matches!(
            DateRange::parse("30/02/2024", "01/03/2024"),
            Err(DomainError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn display_uses_wire_format() {
        let r = range((10, 6), (15, 6));
        assert_eq!(r.to_string(), "[10/06/2024, 15/06/2024]");
    }
}
