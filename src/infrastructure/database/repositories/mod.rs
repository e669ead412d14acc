//! SeaORM repository implementations

mod booking_repository;
mod repository_provider;
mod reserved_dates_repository;
mod room_repository;

pub use booking_repository::SeaOrmBookingRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use reserved_dates_repository::SeaOrmReservedDatesRepository;
pub use room_repository::SeaOrmRoomRepository;

use crate::shared::errors::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}
