use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Room: composite unique (hotel_id, room_number)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_room_hotel_number")
                    .table(Room::Table)
                    .col(Room::HotelId)
                    .col(Room::RoomNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Hotel: one name per city
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_hotel_name_city")
                    .table(Hotel::Table)
                    .col(Hotel::Name)
                    .col(Hotel::City)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Reservation: lookups by room and by hotel
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservation_room")
                    .table(Reservation::Table)
                    .col(Reservation::RoomId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservation_hotel_status")
                    .table(Reservation::Table)
                    .col(Reservation::HotelId)
                    .col(Reservation::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_room_hotel_number").table(Room::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_hotel_name_city").table(Hotel::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reservation_room").table(Reservation::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reservation_hotel_status").table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Room { Table, HotelId, RoomNumber }

#[derive(DeriveIden)]
enum Hotel { Table, Name, City }

#[derive(DeriveIden)]
enum Reservation { Table, RoomId, HotelId, Status }
