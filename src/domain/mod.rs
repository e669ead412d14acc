pub mod booking;
pub mod date_range;
pub mod repositories;
pub mod reserved_dates;
pub mod room;

// Re-export commonly used types
pub use booking::{Booking, BookingRepository};
pub use date_range::{parse_date, DateRange, DATE_FORMAT};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reserved_dates::{ReservedDates, ReservedDatesRepository};
pub use room::{Room, RoomRepository};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
