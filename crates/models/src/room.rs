use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::enums::RoomType;
use crate::errors::ModelError;
use crate::hotel;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub room_number: i32,
    pub room_type: String,
    pub capacity: i32,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Hotel,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Hotel => Entity::belongs_to(hotel::Entity).from(Column::HotelId).to(hotel::Column::Id).into(),
        }
    }
}

impl Related<hotel::Entity> for Entity {
    fn to() -> RelationDef { Relation::Hotel.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn room_type(&self) -> Result<RoomType, ModelError> { self.room_type.parse() }
}

/// Room as submitted by the owning hotel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewRoom {
    pub room_number: i32,
    pub room_type: RoomType,
    pub capacity: i32,
    pub price: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool { true }

pub fn validate_room_number(n: i32) -> Result<(), ModelError> {
    if n <= 0 { return Err(ModelError::Validation("room_number must be > 0".into())); }
    Ok(())
}

pub fn validate_capacity(n: i32) -> Result<(), ModelError> {
    if !(1..=32).contains(&n) { return Err(ModelError::Validation("capacity must be within 1..=32".into())); }
    Ok(())
}

pub fn validate_price(p: f64) -> Result<(), ModelError> {
    if !p.is_finite() || p <= 0.0 { return Err(ModelError::Validation("price must be a positive amount".into())); }
    Ok(())
}

impl NewRoom {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_room_number(self.room_number)?;
        validate_capacity(self.capacity)?;
        validate_price(self.price)
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, hotel_id: Uuid, input: &NewRoom) -> Result<Model, ModelError> {
    input.validate()?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        hotel_id: Set(hotel_id),
        room_number: Set(input.room_number),
        room_type: Set(input.room_type.as_str().to_string()),
        capacity: Set(input.capacity),
        price: Set(input.price),
        available: Set(input.available),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn list_by_hotel<C: ConnectionTrait>(db: &C, hotel_id: Uuid) -> Result<Vec<Model>, ModelError> {
    use sea_orm::QueryOrder;
    Entity::find()
        .filter(Column::HotelId.eq(hotel_id))
        .order_by_asc(Column::RoomNumber)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
