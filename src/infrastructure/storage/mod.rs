//! Storage backends outside the database

pub mod memory;

pub use memory::InMemoryRepositoryProvider;
