//! Booking business logic service
//!
//! Checks a requested date range against every existing reservation
//! for the requested rooms, then commits the booking atomically.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info};
use validator::Validate;

use crate::application::dto::BookingRequest;
use crate::domain::{Booking, DateRange, DomainResult, RepositoryProvider};
use crate::shared::errors::{DomainError, ReservationConflict};

/// Service for booking creation and availability checks.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    /// One lock per room id. Held across the check-then-commit sequence
    /// so concurrent bookings for the same room serialize; entries live
    /// for the service lifetime.
    room_locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            room_locks: DashMap::new(),
        }
    }

    /// Commit a booking: reserve every requested room for the requested
    /// dates, or nothing at all.
    ///
    /// The request fails as a whole on the first malformed date or
    /// unknown room; date conflicts are collected across all rooms and
    /// returned together.
    pub async fn commit_booking(&self, request: BookingRequest) -> DomainResult<Booking> {
        request
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let dates = DateRange::parse(&request.date_from, &request.date_to)?;

        // Lock rooms in ascending id order so two bookings sharing rooms
        // cannot deadlock.
        let mut room_ids = request.room_ids.clone();
        room_ids.sort_unstable();
        room_ids.dedup();
        let _guards = self.lock_rooms(&room_ids).await;

        let mut conflicts = Vec::new();
        for &room_id in &room_ids {
            self.repos
                .rooms()
                .find_by_id(room_id)
                .await?
                .ok_or(DomainError::RoomNotFound(room_id))?;

            for reserved in self.repos.reserved_dates().find_by_room_id(room_id).await? {
                if reserved.dates.overlaps(&dates) {
                    conflicts.push(ReservationConflict {
                        room_id,
                        existing: reserved.dates,
                        requested: dates,
                    });
                }
            }
        }

        if !conflicts.is_empty() {
            info!(
                customer_id = request.customer_id,
                conflicts = conflicts.len(),
                "Booking rejected: dates already reserved"
            );
            return Err(DomainError::DateRangeConflict(conflicts));
        }

        let mut booking = Booking::new(request.customer_id, dates, room_ids);
        booking.number_of_adults = request.number_of_adults;
        booking.number_of_kids = request.number_of_kids;
        booking.all_inclusive = request.all_inclusive;
        booking.full_board = request.full_board;
        booking.half_board = request.half_board;
        booking.extra_beds = request.extra_beds;

        let booking = self.repos.bookings().create(booking).await?;
        info!(
            booking_id = booking.id,
            customer_id = booking.customer_id,
            rooms = booking.room_ids.len(),
            "Booking committed"
        );
        Ok(booking)
    }

    /// Read-only probe: is `room_id` free for the whole of `dates`?
    pub async fn is_room_available(&self, room_id: i64, dates: &DateRange) -> DomainResult<bool> {
        self.repos
            .rooms()
            .find_by_id(room_id)
            .await?
            .ok_or(DomainError::RoomNotFound(room_id))?;

        let reserved = self.repos.reserved_dates().find_by_room_id(room_id).await?;
        Ok(reserved.iter().all(|r| !r.dates.overlaps(dates)))
    }

    /// Acquire the per-room locks for `room_ids`. The ids must already be
    /// sorted and deduplicated.
    async fn lock_rooms(&self, room_ids: &[i64]) -> Vec<OwnedMutexGuard<()>> {
        let mut guards = Vec::with_capacity(room_ids.len());
        for &room_id in room_ids {
            // Clone the Arc out before awaiting; the map shard must not
            // stay borrowed across the lock await.
            let lock = Arc::clone(&*self.room_locks.entry(room_id).or_default());
            debug!(room_id, "Acquiring room lock");
            guards.push(lock.lock_owned().await);
        }
        guards
    }
}

// ── Tests ──────────────────────────────────────────────────────
