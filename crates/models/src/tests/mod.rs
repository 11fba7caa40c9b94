/// CRUD operations tests for all entities
pub mod crud_tests;


use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

use crate::db::{connect_with_config, DatabaseConfig};
use crate::{hotel, Address, HotelType};

/// Fresh migrated in-memory database.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub(crate) fn jaipur() -> Address {
    Address {
        street: "Near Hospital".into(),
        city: "Jaipur".into(),
        state: "RJ".into(),
        pincode: "123456".into(),
        country: "India".into(),
    }
}

pub(crate) fn new_hotel(name: &str, email: &str) -> hotel::NewHotel {
    hotel::NewHotel {
        name: name.into(),
        email: email.into(),
        phone: "9999999999".into(),
        telephone: "9000000000".into(),
        password_hash: "not-a-real-hash".into(),
        address: jaipur(),
        hotel_type: HotelType::Hotel,
    }
}
