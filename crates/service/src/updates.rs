//! Single-field updates for hotels and rooms.
//!
//! Each variant names one column and carries a typed payload; applying it is a
//! single `UPDATE ... SET col = ? WHERE id = ?`.

use chrono::Utc;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use models::{hotel, room, validate, HotelType, RoomType};
use crate::accounts::{authenticate_hotel, email_in_use};
use crate::auth::Principal;
use crate::errors::ServiceError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum HotelUpdate {
    Name(String),
    Email(String),
    Phone(String),
    Telephone(String),
    HotelType(HotelType),
}

impl HotelUpdate {
    pub fn validate(&self) -> Result<(), ServiceError> {
        match self {
            HotelUpdate::Name(v) => validate::validate_name(v)?,
            HotelUpdate::Email(v) => validate::validate_email(v)?,
            HotelUpdate::Phone(v) | HotelUpdate::Telephone(v) => validate::validate_phone(v)?,
            HotelUpdate::HotelType(_) => {}
        }
        Ok(())
    }

    fn assignment(&self) -> (hotel::Column, SimpleExpr) {
        match self {
            HotelUpdate::Name(v) => (hotel::Column::Name, Expr::value(v.trim())),
            HotelUpdate::Email(v) => (hotel::Column::Email, Expr::value(v.trim().to_ascii_lowercase())),
            HotelUpdate::Phone(v) => (hotel::Column::Phone, Expr::value(v.clone())),
            HotelUpdate::Telephone(v) => (hotel::Column::Telephone, Expr::value(v.clone())),
            HotelUpdate::HotelType(t) => (hotel::Column::HotelType, Expr::value(t.as_str())),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            HotelUpdate::Name(_) => "name",
            HotelUpdate::Email(_) => "email",
            HotelUpdate::Phone(_) => "phone",
            HotelUpdate::Telephone(_) => "telephone",
            HotelUpdate::HotelType(_) => "hotel_type",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum RoomUpdate {
    RoomType(RoomType),
    Capacity(i32),
    Price(f64),
    Available(bool),
}

impl RoomUpdate {
    pub fn validate(&self) -> Result<(), ServiceError> {
        match self {
            RoomUpdate::Capacity(n) => room::validate_capacity(*n)?,
            RoomUpdate::Price(p) => room::validate_price(*p)?,
            RoomUpdate::RoomType(_) | RoomUpdate::Available(_) => {}
        }
        Ok(())
    }

    fn assignment(&self) -> (room::Column, SimpleExpr) {
        match self {
            RoomUpdate::RoomType(t) => (room::Column::RoomType, Expr::value(t.as_str())),
            RoomUpdate::Capacity(n) => (room::Column::Capacity, Expr::value(*n)),
            RoomUpdate::Price(p) => (room::Column::Price, Expr::value(*p)),
            RoomUpdate::Available(b) => (room::Column::Available, Expr::value(*b)),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            RoomUpdate::RoomType(_) => "room_type",
            RoomUpdate::Capacity(_) => "capacity",
            RoomUpdate::Price(_) => "price",
            RoomUpdate::Available(_) => "available",
        }
    }
}

#[instrument(skip(db, principal, password, update), fields(hotel_id = %principal.id, field = update.field()))]
pub async fn apply_hotel_update(
    db: &DatabaseConnection,
    principal: &Principal,
    password: &str,
    update: HotelUpdate,
) -> Result<hotel::Model, ServiceError> {
    update.validate()?;
    let current = authenticate_hotel(db, principal, password).await?;

    match &update {
        HotelUpdate::Email(email) if !email.trim().eq_ignore_ascii_case(&current.email) => {
            if email_in_use(db, email).await? {
                return Err(ServiceError::Conflict(format!("email {} is already registered", email.trim())));
            }
        }
        HotelUpdate::Name(name) => {
            if let Some(other) = hotel::find_by_name_in_city(db, name, &current.city).await? {
                if other.id != current.id {
                    return Err(ServiceError::Conflict(format!("a hotel named {} already exists in {}", name.trim(), current.city)));
                }
            }
        }
        _ => {}
    }

    let (column, value) = update.assignment();
    hotel::Entity::update_many()
        .col_expr(column, value)
        .col_expr(hotel::Column::UpdatedAt, Expr::value(sea_orm::prelude::DateTimeWithTimeZone::from(Utc::now())))
        .filter(hotel::Column::Id.eq(current.id))
        .exec(db)
        .await?;
    info!("hotel_updated");

    hotel::Entity::find_by_id(current.id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("hotel"))
}

#[instrument(skip(db, principal, password, update), fields(hotel_id = %principal.id, room_id = %room_id, field = update.field()))]
pub async fn apply_room_update(
    db: &DatabaseConnection,
    principal: &Principal,
    room_id: Uuid,
    password: &str,
    update: RoomUpdate,
) -> Result<room::Model, ServiceError> {
    update.validate()?;
    let owner = authenticate_hotel(db, principal, password).await?;

    let (column, value) = update.assignment();
    let res = room::Entity::update_many()
        .col_expr(column, value)
        .filter(room::Column::Id.eq(room_id))
        .filter(room::Column::HotelId.eq(owner.id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("room"));
    }
    info!("room_updated");

    room::Entity::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("room"))
}
