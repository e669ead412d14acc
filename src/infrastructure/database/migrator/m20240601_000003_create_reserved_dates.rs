//! Create reserved_dates table
//!
//! One row per room per committed booking; doubles as the
//! booking-to-room association. Rows cascade away with their booking
//! or room.

use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_rooms::Rooms;
use super::m20240601_000002_create_bookings::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservedDates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReservedDates::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ReservedDates::RoomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReservedDates::BookingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ReservedDates::DateFrom).date().not_null())
                    .col(ColumnDef::new(ReservedDates::DateTo).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reserved_dates_room")
                            .from(ReservedDates::Table, ReservedDates::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reserved_dates_booking")
                            .from(ReservedDates::Table, ReservedDates::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reserved_dates_room")
                    .table(ReservedDates::Table)
                    .col(ReservedDates::RoomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reserved_dates_booking")
                    .table(ReservedDates::Table)
                    .col(ReservedDates::BookingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservedDates::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ReservedDates {
    Table,
    Id,
    RoomId,
    BookingId,
    DateFrom,
    DateTo,
}
