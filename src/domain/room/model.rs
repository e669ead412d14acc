//! Room domain entity

/// A bookable room. Occupancy is tracked through `ReservedDates`
/// records referencing the room, one per committed booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique room ID (0 until persisted)
    pub id: i64,
    /// Number of beds in the room
    pub number_of_beds: i32,
    /// Price per night, in minor currency units
    pub price_per_night: i64,
}

impl Room {
    pub fn new(number_of_beds: i32, price_per_night: i64) -> Self {
        Self {
            id: 0,
            number_of_beds,
            price_per_night,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_room_is_unsaved() {
        let r = Room::new(2, 12_500);
        assert_eq!(r.id, 0);
        assert_eq!(r.number_of_beds, 2);
        assert_eq!(r.price_per_night, 12_500);
    }
}
