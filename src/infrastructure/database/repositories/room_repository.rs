//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use super::db_err;
use crate::domain::room::{Room, RoomRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::room;

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        number_of_beds: m.number_of_beds,
        price_per_night: m.price_per_night,
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn save(&self, r: Room) -> DomainResult<Room> {
        debug!("Saving room with {} beds", r.number_of_beds);

        let model = room::ActiveModel {
            id: NotSet,
            number_of_beds: Set(r.number_of_beds),
            price_per_night: Set(r.price_per_night),
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }
}
