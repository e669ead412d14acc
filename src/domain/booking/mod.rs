//! Booking aggregate
//!
//! Contains the Booking entity and repository interface.

pub mod model;
pub mod repository;

pub use model::Booking;
pub use repository::BookingRepository;
