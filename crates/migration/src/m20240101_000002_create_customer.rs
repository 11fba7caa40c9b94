//! Create `customer` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(uuid(Customer::Id).primary_key())
                    .col(string_len(Customer::Name, 128).not_null())
                    .col(string_len(Customer::Email, 255).unique_key().not_null())
                    .col(string_len(Customer::Phone, 32).not_null())
                    .col(string_len(Customer::PasswordHash, 255).not_null())
                    .col(string_len(Customer::Street, 255).not_null())
                    .col(string_len(Customer::City, 128).not_null())
                    .col(string_len(Customer::State, 128).not_null())
                    .col(string_len(Customer::Pincode, 16).not_null())
                    .col(string_len(Customer::Country, 128).not_null())
                    .col(string_len(Customer::Role, 32).not_null())
                    .col(timestamp_with_time_zone(Customer::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Customer::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer {
    Table,
    Id,
    Name,
    Email,
    Phone,
    PasswordHash,
    Street,
    City,
    State,
    Pincode,
    Country,
    Role,
    CreatedAt,
    UpdatedAt,
}
