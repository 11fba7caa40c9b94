//! Create `room` table with FK to `hotel`.
//!
//! Rooms are owned by their hotel and go away with it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(uuid(Room::Id).primary_key())
                    .col(uuid(Room::HotelId).not_null())
                    .col(integer(Room::RoomNumber).not_null())
                    .col(string_len(Room::RoomType, 32).not_null())
                    .col(integer(Room::Capacity).not_null())
                    .col(double(Room::Price).not_null())
                    .col(boolean(Room::Available).not_null())
                    .col(timestamp_with_time_zone(Room::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_hotel")
                            .from(Room::Table, Room::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Room::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Room { Table, Id, HotelId, RoomNumber, RoomType, Capacity, Price, Available, CreatedAt }

#[derive(DeriveIden)]
enum Hotel { Table, Id }
