#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use models::{Address, HotelType, Role, RoomType};
use models::room::NewRoom;
use uuid::Uuid;

use crate::auth::Principal;
use crate::customer_service::{register_customer, RegisterCustomerInput};
use crate::hotel_service::{register_hotel, RegisterHotelInput};
use crate::room_service::add_room;

pub const PASSWORD: &str = "Passw0rd!";

/// Fresh in-memory database with the full schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn jaipur() -> Address {
    Address {
        street: "MI Road".into(),
        city: "Jaipur".into(),
        state: "Rajasthan".into(),
        pincode: "302001".into(),
        country: "India".into(),
    }
}

pub fn hotel_input(name: &str, email: &str) -> RegisterHotelInput {
    RegisterHotelInput {
        name: name.into(),
        email: email.into(),
        password: PASSWORD.into(),
        phone: "+91 98290 00000".into(),
        telephone: None,
        address: jaipur(),
        hotel_type: HotelType::Hotel,
    }
}

pub fn customer_input(name: &str, email: &str) -> RegisterCustomerInput {
    RegisterCustomerInput {
        name: name.into(),
        email: email.into(),
        password: PASSWORD.into(),
        phone: "+91 98000 11111".into(),
        address: jaipur(),
    }
}

pub fn room_input(number: i32, price: f64) -> NewRoom {
    NewRoom { room_number: number, room_type: RoomType::Ac, capacity: 2, price, available: true }
}

/// "MyHotel" with room 1001 at 5000 per night.
pub async fn my_hotel(db: &DatabaseConnection) -> Result<(Principal, models::room::Model), anyhow::Error> {
    let hotel = register_hotel(db, hotel_input("MyHotel", &format!("{}@myhotel.in", Uuid::new_v4()))).await?;
    let principal = Principal { id: hotel.id, email: hotel.email, role: Role::Hotel };
    let room = add_room(db, &principal, room_input(1001, 5000.0)).await?;
    Ok((principal, room))
}

pub async fn guest(db: &DatabaseConnection) -> Result<Principal, anyhow::Error> {
    let c = register_customer(db, customer_input("Asha", &format!("{}@guest.in", Uuid::new_v4()))).await?;
    Ok(Principal { id: c.id, email: c.email, role: Role::Customer })
}

pub fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}
