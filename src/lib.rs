//! # Holiday Maker booking engine
//!
//! Reservation core for a holiday-booking backend: rooms, bookings and
//! reserved date ranges, with conflict-checked booking creation.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, date-range logic and repository traits
//! - **application**: Booking commit service and request payloads
//! - **infrastructure**: External concerns (SeaORM persistence, in-memory store)
//! - **shared**: Error taxonomy used across layers

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use infrastructure::storage::InMemoryRepositoryProvider;

// Re-export the core service and domain types
pub use application::BookingService;
pub use domain::{Booking, DateRange, DomainError, DomainResult, ReservedDates, Room};
