//! Create `hotel` table.
//!
//! Email is unique among hotels; uniqueness against customers is enforced by
//! the service layer. Address is flattened into columns.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(uuid(Hotel::Id).primary_key())
                    .col(string_len(Hotel::Name, 128).not_null())
                    .col(string_len(Hotel::Email, 255).unique_key().not_null())
                    .col(string_len(Hotel::Phone, 32).not_null())
                    .col(string_len(Hotel::Telephone, 32).not_null())
                    .col(string_len(Hotel::PasswordHash, 255).not_null())
                    .col(string_len(Hotel::Street, 255).not_null())
                    .col(string_len(Hotel::City, 128).not_null())
                    .col(string_len(Hotel::State, 128).not_null())
                    .col(string_len(Hotel::Pincode, 16).not_null())
                    .col(string_len(Hotel::Country, 128).not_null())
                    .col(string_len(Hotel::HotelType, 32).not_null())
                    .col(string_len(Hotel::Role, 32).not_null())
                    .col(timestamp_with_time_zone(Hotel::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Hotel::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Hotel::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Hotel {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Telephone,
    PasswordHash,
    Street,
    City,
    State,
    Pincode,
    Country,
    HotelType,
    Role,
    CreatedAt,
    UpdatedAt,
}
