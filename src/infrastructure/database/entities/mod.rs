//! SeaORM entity definitions

pub mod booking;
pub mod reserved_dates;
pub mod room;
