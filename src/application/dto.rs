//! Booking request payloads

use serde::Deserialize;
use validator::Validate;

/// Request to create a new booking.
///
/// Dates travel as text in `dd/MM/yyyy` form and are parsed by the
/// booking service; everything here is shape validation only.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingRequest {
    /// Customer placing the booking
    pub customer_id: i64,
    /// Check-in date (`dd/MM/yyyy`)
    pub date_from: String,
    /// Check-out date (`dd/MM/yyyy`)
    pub date_to: String,
    /// Rooms to reserve; all of them are booked, or none
    #[validate(length(min = 1, message = "at least one room is required"))]
    pub room_ids: Vec<i64>,
    #[validate(range(min = 1))]
    pub number_of_adults: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub number_of_kids: i32,
    #[serde(default)]
    pub all_inclusive: bool,
    #[serde(default)]
    pub full_board: bool,
    #[serde(default)]
    pub half_board: bool,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub extra_beds: i32,
}

impl BookingRequest {
    pub fn new(
        customer_id: i64,
        date_from: impl Into<String>,
        date_to: impl Into<String>,
        room_ids: Vec<i64>,
    ) -> Self {
        Self {
            customer_id,
            date_from: date_from.into(),
            date_to: date_to.into(),
            room_ids,
            number_of_adults: 1,
            number_of_kids: 0,
            all_inclusive: false,
            full_board: false,
            half_board: false,
            extra_beds: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_passes_validation() {
        let req = BookingRequest::new(1, "10/06/2024", "15/06/2024", vec![1]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_room_list_fails_validation() {
        let req = BookingRequest::new(1, "10/06/2024", "15/06/2024", vec![]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_adults_fails_validation() {
        let mut req = BookingRequest::new(1, "10/06/2024", "15/06/2024", vec![1]);
        req.number_of_adults = 0;
        assert!(req.validate().is_err());
    }
}
