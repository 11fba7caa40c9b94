use sea_orm::{DatabaseConnection, EntityTrait};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use models::customer::{self, NewCustomer};
use models::Address;
use crate::accounts::email_in_use;
use crate::auth::password::hash_password;
use crate::errors::ServiceError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterCustomerInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: Address,
}

#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn register_customer(db: &DatabaseConnection, input: RegisterCustomerInput) -> Result<customer::Model, ServiceError> {
    models::validate::validate_email(&input.email)?;
    if email_in_use(db, &input.email).await? {
        return Err(ServiceError::Conflict(format!("email {} is already registered", input.email.trim())));
    }
    let password_hash = hash_password(&input.password)?;
    let created = customer::create(
        db,
        NewCustomer { name: input.name, email: input.email, phone: input.phone, password_hash, address: input.address },
    )
    .await?;
    info!(customer_id = %created.id, "customer_registered");
    Ok(created)
}

pub async fn get_customer(db: &DatabaseConnection, id: Uuid) -> Result<customer::Model, ServiceError> {
    customer::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("customer"))
}
