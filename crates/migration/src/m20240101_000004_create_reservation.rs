//! Create `reservation` table.
//!
//! Every reference is nullable with `SET NULL` so a reservation outlives the
//! room, hotel or customer it pointed at.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(uuid(Reservation::Id).primary_key())
                    .col(uuid_null(Reservation::RoomId))
                    .col(uuid_null(Reservation::HotelId))
                    .col(uuid_null(Reservation::CustomerId))
                    .col(date(Reservation::CheckIn).not_null())
                    .col(date(Reservation::CheckOut).not_null())
                    .col(string_len(Reservation::Status, 16).not_null())
                    .col(timestamp_with_time_zone(Reservation::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_hotel")
                            .from(Reservation::Table, Reservation::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_customer")
                            .from(Reservation::Table, Reservation::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reservation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reservation { Table, Id, RoomId, HotelId, CustomerId, CheckIn, CheckOut, Status, CreatedAt }

#[derive(DeriveIden)]
enum Room { Table, Id }

#[derive(DeriveIden)]
enum Hotel { Table, Id }

#[derive(DeriveIden)]
enum Customer { Table, Id }
