use std::fmt;

use thiserror::Error;

use crate::domain::date_range::DateRange;

/// One rejected room within a booking attempt: the range that is already
/// reserved and the range the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationConflict {
    pub room_id: i64,
    pub existing: DateRange,
    pub requested: DateRange,
}

impl fmt::Display for ReservationConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {}: requested {} clashes with reserved {}",
            self.room_id, self.requested, self.existing
        )
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Room not found: {0}")]
    RoomNotFound(i64),

    #[error("Invalid date {0:?}, expected dd/MM/yyyy")]
    InvalidDateFormat(String),

    #[error("Requested dates conflict with {} existing reservation(s)", .0.len())]
    DateRangeConflict(Vec<ReservationConflict>),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}
