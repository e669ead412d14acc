//! ReservedDates aggregate
//!
//! A committed occupancy record: one room, one booking, one date range.

pub mod model;
pub mod repository;

pub use model::ReservedDates;
pub use repository::ReservedDatesRepository;
