use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::enums::Role;
use crate::errors::ModelError;
use crate::validate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
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
}

#[derive(Clone, Debug)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub address: Address,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewCustomer) -> Result<Model, ModelError> {
    validate::validate_name(&input.name)?;
    validate::validate_email(&input.email)?;
    validate::validate_phone(&input.phone)?;
    input.address.validate()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name.trim().to_string()),
        email: Set(input.email.trim().to_ascii_lowercase()),
        phone: Set(input.phone),
        password_hash: Set(input.password_hash),
        street: Set(input.address.street),
        city: Set(input.address.city.trim().to_string()),
        state: Set(input.address.state),
        pincode: Set(input.address.pincode),
        country: Set(input.address.country),
        role: Set(Role::Customer.as_str().to_string()),
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
