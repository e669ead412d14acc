//! ReservedDates domain entity

use crate::domain::date_range::DateRange;

/// Confirmed occupancy of one room by one booking. Immutable once
/// committed; removed together with its owning booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedDates {
    /// Unique record ID (0 until persisted)
    pub id: i64,
    /// Room this reservation occupies
    pub room_id: i64,
    /// Booking that owns this reservation
    pub booking_id: i64,
    /// Reserved interval, endpoints inclusive
    pub dates: DateRange,
}

impl ReservedDates {
    pub fn new(room_id: i64, booking_id: i64, dates: DateRange) -> Self {
        Self {
            id: 0,
            room_id,
            booking_id,
            dates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_links_room_and_booking() {
        let dates = DateRange::parse("10/06/2024", "15/06/2024").unwrap();
        let rd = ReservedDates::new(3, 7, dates);
        assert_eq!(rd.id, 0);
        assert_eq!(rd.room_id, 3);
        assert_eq!(rd.booking_id, 7);
        assert_eq!(rd.dates, dates);
    }
}
