use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use models::hotel::{self, NewHotel};
use models::{Address, HotelType};
use crate::accounts::{current_customer, email_in_use};
use crate::auth::password::hash_password;
use crate::auth::Principal;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Hotel sign-up form. The telephone falls back to the phone number.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterHotelInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    #[serde(default)]
    pub telephone: Option<String>,
    pub address: Address,
    pub hotel_type: HotelType,
}

#[instrument(skip(db, input), fields(email = %input.email, city = %input.address.city))]
pub async fn register_hotel(db: &DatabaseConnection, input: RegisterHotelInput) -> Result<hotel::Model, ServiceError> {
    let telephone = input.telephone.clone().filter(|t| !t.trim().is_empty()).unwrap_or_else(|| input.phone.clone());
    let mut new = NewHotel {
        name: input.name,
        email: input.email,
        phone: input.phone,
        telephone,
        password_hash: "pending".into(),
        address: input.address,
        hotel_type: input.hotel_type,
    };
    new.validate()?;

    if email_in_use(db, &new.email).await? {
        return Err(ServiceError::Conflict(format!("email {} is already registered", new.email.trim())));
    }
    if hotel::find_by_name_in_city(db, &new.name, &new.address.city).await?.is_some() {
        return Err(ServiceError::Conflict(format!("a hotel named {} already exists in {}", new.name.trim(), new.address.city.trim())));
    }

    new.password_hash = hash_password(&input.password)?;
    let created = hotel::create(db, new).await?;
    info!(hotel_id = %created.id, "hotel_registered");
    Ok(created)
}

pub async fn get_hotel(db: &DatabaseConnection, id: Uuid) -> Result<hotel::Model, ServiceError> {
    hotel::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("hotel"))
}

/// Hotels of a city, by name, one page at a time.
pub async fn hotels_in_city(db: &DatabaseConnection, city: &str, page: Pagination) -> Result<Vec<hotel::Model>, ServiceError> {
    let (offset, limit) = page.offset_limit();
    let found = hotel::Entity::find()
        .filter(hotel::Column::City.eq(city.trim()))
        .order_by_asc(hotel::Column::Name)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;
    if found.is_empty() {
        return Err(ServiceError::NotFound(format!("no hotels in {}", city.trim())));
    }
    Ok(found)
}

/// Hotels in the calling customer's city.
pub async fn hotels_near(db: &DatabaseConnection, principal: &Principal) -> Result<Vec<hotel::Model>, ServiceError> {
    let customer = current_customer(db, principal).await?;
    hotels_in_city(db, &customer.city, Pagination { page: 1, per_page: crate::pagination::MAX_PER_PAGE }).await
}
