//! SeaORM implementation of ReservedDatesRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::db_err;
use crate::domain::reserved_dates::{ReservedDates, ReservedDatesRepository};
use crate::domain::{DateRange, DomainResult};
use crate::infrastructure::database::entities::reserved_dates;
use crate::shared::errors::DomainError;

pub struct SeaOrmReservedDatesRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservedDatesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: reserved_dates::Model) -> DomainResult<ReservedDates> {
    let dates = DateRange::new(m.date_from, m.date_to)
        .map_err(|_| DomainError::Storage(format!("reservation {} has an inverted range", m.id)))?;
    Ok(ReservedDates {
        id: m.id,
        room_id: m.room_id,
        booking_id: m.booking_id,
        dates,
    })
}

#[async_trait]
impl ReservedDatesRepository for SeaOrmReservedDatesRepository {
    async fn find_by_room_id(&self, room_id: i64) -> DomainResult<Vec<ReservedDates>> {
        let models = reserved_dates::Entity::find()
            .filter(reserved_dates::Column::RoomId.eq(room_id))
            .order_by_asc(reserved_dates::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_by_booking_id(&self, booking_id: i64) -> DomainResult<Vec<ReservedDates>> {
        let models = reserved_dates::Entity::find()
            .filter(reserved_dates::Column::BookingId.eq(booking_id))
            .order_by_asc(reserved_dates::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}
