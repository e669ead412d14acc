//! Room entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub number_of_beds: i32,

    /// Price per night, in minor currency units
    pub price_per_night: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reserved_dates::Entity")]
    ReservedDates,
}

impl Related<super::reserved_dates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservedDates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
