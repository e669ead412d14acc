//! In-memory repositories for development and testing

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::booking::{Booking, BookingRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reserved_dates::{ReservedDates, ReservedDatesRepository};
use crate::domain::room::{Room, RoomRepository};
use crate::domain::DomainResult;

/// Shared state behind the in-memory repositories.
struct Store {
    rooms: DashMap<i64, Room>,
    bookings: DashMap<i64, Booking>,
    reserved_dates: DashMap<i64, ReservedDates>,
    room_counter: AtomicI64,
    booking_counter: AtomicI64,
    reserved_counter: AtomicI64,
}

impl Store {
    fn new() -> Self {
        Self {
            rooms: DashMap::new(),
            bookings: DashMap::new(),
            reserved_dates: DashMap::new(),
            room_counter: AtomicI64::new(1),
            booking_counter: AtomicI64::new(1),
            reserved_counter: AtomicI64::new(1),
        }
    }
}

fn next_id(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::SeqCst)
}

// ── Per-aggregate repositories ──────────────────────────────────

pub struct InMemoryRoomRepository {
    store: Arc<Store>,
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn save(&self, mut room: Room) -> DomainResult<Room> {
        room.id = next_id(&self.store.room_counter);
        self.store.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Room>> {
        Ok(self.store.rooms.get(&id).map(|r| r.clone()))
    }
}

pub struct InMemoryBookingRepository {
    store: Arc<Store>,
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, mut booking: Booking) -> DomainResult<Booking> {
        booking.id = next_id(&self.store.booking_counter);
        for &room_id in &booking.room_ids {
            let mut rd = ReservedDates::new(room_id, booking.id, booking.dates);
            rd.id = next_id(&self.store.reserved_counter);
            self.store.reserved_dates.insert(rd.id, rd);
        }
        self.store.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Booking>> {
        Ok(self.store.bookings.get(&id).map(|b| b.clone()))
    }
}

pub struct InMemoryReservedDatesRepository {
    store: Arc<Store>,
}

#[async_trait]
impl ReservedDatesRepository for InMemoryReservedDatesRepository {
    async fn find_by_room_id(&self, room_id: i64) -> DomainResult<Vec<ReservedDates>> {
        let mut found: Vec<ReservedDates> = self
            .store
            .reserved_dates
            .iter()
            .filter(|e| e.value().room_id == room_id)
            .map(|e| e.value().clone())
            .collect();
        found.sort_by_key(|rd| rd.id);
        Ok(found)
    }

    async fn find_by_booking_id(&self, booking_id: i64) -> DomainResult<Vec<ReservedDates>> {
        let mut found: Vec<ReservedDates> = self
            .store
            .reserved_dates
            .iter()
            .filter(|e| e.value().booking_id == booking_id)
            .map(|e| e.value().clone())
            .collect();
        found.sort_by_key(|rd| rd.id);
        Ok(found)
    }
}

// ── Provider ────────────────────────────────────────────────────

/// In-memory repository provider for development and testing
pub struct InMemoryRepositoryProvider {
    rooms: InMemoryRoomRepository,
    bookings: InMemoryBookingRepository,
    reserved_dates: InMemoryReservedDatesRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let store = Arc::new(Store::new());
        Self {
            rooms: InMemoryRoomRepository {
                store: store.clone(),
            },
            bookings: InMemoryBookingRepository {
                store: store.clone(),
            },
            reserved_dates: InMemoryReservedDatesRepository { store },
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
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

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateRange;

    #[tokio::test]
    async fn save_assigns_sequential_room_ids() {
        let provider = InMemoryRepositoryProvider::new();
        let r1 = provider.rooms().save(Room::new(1, 5_000)).await.unwrap();
        let r2 = provider.rooms().save(Room::new(2, 8_000)).await.unwrap();
        assert_eq!(r1.id, 1);
        assert_eq!(r2.id, 2);
        assert_eq!(
            provider.rooms().find_by_id(r2.id).await.unwrap().unwrap(),
            r2
        );
        assert!(provider.rooms().find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_booking_records_reservations_per_room() {
        let provider = InMemoryRepositoryProvider::new();
        let r1 = provider.rooms().save(Room::new(1, 5_000)).await.unwrap();
        let r2 = provider.rooms().save(Room::new(2, 8_000)).await.unwrap();

        let dates = DateRange::parse("10/06/2024", "15/06/2024").unwrap();
        let booking = provider
            .bookings()
            .create(Booking::new(7, dates, vec![r1.id, r2.id]))
            .await
            .unwrap();
        assert!(booking.id > 0);

        let by_booking = provider
            .reserved_dates()
            .find_by_booking_id(booking.id)
            .await
            .unwrap();
        assert_eq!(by_booking.len(), 2);

        let by_room = provider
            .reserved_dates()
            .find_by_room_id(r1.id)
            .await
            .unwrap();
        assert_eq!(by_room.len(), 1);
        assert_eq!(by_room[0].booking_id, booking.id);
        assert_eq!(by_room[0].dates, dates);

        let found = provider
            .bookings()
            .find_by_id(booking.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, booking);
    }
}
