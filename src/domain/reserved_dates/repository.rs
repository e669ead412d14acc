//! ReservedDates repository interface

use async_trait::async_trait;

use super::model::ReservedDates;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservedDatesRepository: Send + Sync {
    /// All reservations for a room (any booking)
    async fn find_by_room_id(&self, room_id: i64) -> DomainResult<Vec<ReservedDates>>;

    /// All reservations owned by a booking
    async fn find_by_booking_id(&self, booking_id: i64) -> DomainResult<Vec<ReservedDates>>;
}
