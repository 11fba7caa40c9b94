use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::enums::{HotelType, Role};
use crate::errors::ModelError;
use crate::{room, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub telephone: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
    pub hotel_type: String,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Room,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Room => Entity::has_many(room::Entity).into() }
    }
}

impl Related<room::Entity> for Entity {
    fn to() -> RelationDef { Relation::Room.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            pincode: self.pincode.clone(),
            country: self.country.clone(),
        }
    }

    pub fn hotel_type(&self) -> Result<HotelType, ModelError> { self.hotel_type.parse() }
}

/// Validated insert payload; the password is already hashed.
#[derive(Clone, Debug)]
pub struct NewHotel {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub telephone: String,
    pub password_hash: String,
    pub address: Address,
    pub hotel_type: HotelType,
}

impl NewHotel {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate::validate_name(&self.name)?;
        validate::validate_email(&self.email)?;
        validate::validate_phone(&self.phone)?;
        validate::validate_phone(&self.telephone)?;
        self.address.validate()?;
        if self.password_hash.trim().is_empty() {
            return Err(ModelError::Validation("password hash required".into()));
        }
        Ok(())
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewHotel) -> Result<Model, ModelError> {
    input.validate()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name.trim().to_string()),
        email: Set(input.email.trim().to_ascii_lowercase()),
        phone: Set(input.phone),
        telephone: Set(input.telephone),
        password_hash: Set(input.password_hash),
        street: Set(input.address.street),
        city: Set(input.address.city.trim().to_string()),
        state: Set(input.address.state),
        pincode: Set(input.address.pincode),
        country: Set(input.address.country),
        hotel_type: Set(input.hotel_type.as_str().to_string()),
        role: Set(Role::Hotel.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email.trim().to_ascii_lowercase()))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_name_in_city<C: ConnectionTrait>(db: &C, name: &str, city: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Name.eq(name.trim()))
        .filter(Column::City.eq(city.trim()))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
