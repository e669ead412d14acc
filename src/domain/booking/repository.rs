//! Booking repository interface

use async_trait::async_trait;

use super::model::Booking;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a booking and one `ReservedDates` record per room in
    /// `booking.room_ids`, all-or-nothing. Returns the booking with its
    /// assigned ID.
    ///
    /// Callers must have verified the rooms are free; this method only
    /// guarantees atomicity, not conflict checking.
    async fn create(&self, booking: Booking) -> DomainResult<Booking>;

    /// Find booking by ID, with its room list reconstructed from the
    /// reservations it owns
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Booking>>;
}
