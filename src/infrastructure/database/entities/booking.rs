//! Booking entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub customer_id: i64,

    /// First reserved day (inclusive)
    pub date_from: Date,
    /// Last reserved day (inclusive)
    pub date_to: Date,

    pub number_of_adults: i32,
    pub number_of_kids: i32,
    pub all_inclusive: bool,
    pub full_board: bool,
    pub half_board: bool,
    pub extra_beds: i32,
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
