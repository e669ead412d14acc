//! Booking domain entity

use crate::domain::date_range::DateRange;

/// A customer's booking: the requested date range plus the rooms it
/// occupies. Each room gets one `ReservedDates` record when the booking
/// commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Unique booking ID (0 until persisted)
    pub id: i64,
    /// Customer who placed the booking
    pub customer_id: i64,
    /// Requested stay, endpoints inclusive
    pub dates: DateRange,
    /// Rooms this booking occupies
    pub room_ids: Vec<i64>,
    pub number_of_adults: i32,
    pub number_of_kids: i32,
    pub all_inclusive: bool,
    pub full_board: bool,
    pub half_board: bool,
    pub extra_beds: i32,
}

impl Booking {
    pub fn new(customer_id: i64, dates: DateRange, room_ids: Vec<i64>) -> Self {
        Self {
            id: 0,
            customer_id,
            dates,
            room_ids,
            number_of_adults: 1,
            number_of_kids: 0,
            all_inclusive: false,
            full_board: false,
            half_board: false,
            extra_beds: 0,
        }
    }

    /// Total nights booked across all rooms.
    pub fn room_nights(&self) -> i64 {
        self.dates.nights() * self.room_ids.len() as i64
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking::new(
            42,
            DateRange::parse("10/06/2024", "15/06/2024").unwrap(),
            vec![1, 2],
        )
    }

    #[test]
    fn new_booking_defaults() {
        let b = sample_booking();
        assert_eq!(b.id, 0);
        assert_eq!(b.customer_id, 42);
        assert_eq!(b.room_ids, vec![1, 2]);
        assert_eq!(b.number_of_adults, 1);
        assert_eq!(b.number_of_kids, 0);
        assert!(!b.all_inclusive);
        assert_eq!(b.extra_beds, 0);
    }

    #[test]
    fn room_nights_multiplies_rooms() {
        let b = sample_booking();
        assert_eq!(b.room_nights(), 10);
    }
}
