//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reserved_dates::ReservedDatesRepository;
use crate::domain::room::RoomRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::reserved_dates_repository::SeaOrmReservedDatesRepository;
use super::room_repository::SeaOrmRoomRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let room = repos.rooms().find_by_id(1).await?;
/// let reserved = repos.reserved_dates().find_by_room_id(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    rooms: SeaOrmRoomRepository,
    bookings: SeaOrmBookingRepository,
    reserved_dates: SeaOrmReservedDatesRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            rooms: SeaOrmRoomRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            reserved_dates: SeaOrmReservedDatesRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn reserved_dates(&self) -> &dyn ReservedDatesRepository {
        &self.reserved_dates
    }
}
