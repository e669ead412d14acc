//! SeaORM implementation of BookingRepository
//!
//! `create` runs inside a single transaction: the booking row and its
//! reserved-dates rows land together or not at all.

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::db_err;
use crate::domain::booking::{Booking, BookingRepository};
use crate::domain::{DateRange, DomainResult};
use crate::infrastructure::database::entities::{booking, reserved_dates};
use crate::shared::errors::DomainError;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: booking::Model, room_ids: Vec<i64>) -> DomainResult<Booking> {
    let dates = DateRange::new(m.date_from, m.date_to)
        .map_err(|_| DomainError::Storage(format!("booking {} has an inverted range", m.id)))?;
    Ok(Booking {
        id: m.id,
        customer_id: m.customer_id,
        dates,
        room_ids,
        number_of_adults: m.number_of_adults,
        number_of_kids: m.number_of_kids,
        all_inclusive: m.all_inclusive,
        full_board: m.full_board,
        half_board: m.half_board,
        extra_beds: m.extra_beds,
    })
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create(&self, b: Booking) -> DomainResult<Booking> {
        debug!(
            "Creating booking for customer {} over {} room(s)",
            b.customer_id,
            b.room_ids.len()
        );

        let txn = self.db.begin().await.map_err(db_err)?;

        let saved = booking::ActiveModel {
            id: NotSet,
            customer_id: Set(b.customer_id),
            date_from: Set(b.dates.start()),
            date_to: Set(b.dates.end()),
            number_of_adults: Set(b.number_of_adults),
            number_of_kids: Set(b.number_of_kids),
            all_inclusive: Set(b.all_inclusive),
            full_board: Set(b.full_board),
            half_board: Set(b.half_board),
            extra_beds: Set(b.extra_beds),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        for &room_id in &b.room_ids {
            reserved_dates::ActiveModel {
                id: NotSet,
                room_id: Set(room_id),
                booking_id: Set(saved.id),
                date_from: Set(b.dates.start()),
                date_to: Set(b.dates.end()),
            }
            .insert(&txn)
            .await
            .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)?;

        Ok(Booking { id: saved.id, ..b })
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };

        let room_ids = reserved_dates::Entity::find()
            .filter(reserved_dates::Column::BookingId.eq(id))
            .order_by_asc(reserved_dates::Column::RoomId)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|rd| rd.room_id)
            .collect();

        model_to_domain(model, room_ids).map(Some)
    }
}
