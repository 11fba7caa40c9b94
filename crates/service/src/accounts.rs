//! Lookups shared by the hotel, customer and guard workflows.

use sea_orm::{ConnectionTrait, EntityTrait};

use models::{customer, hotel, Role};
use crate::auth::password::verify_password;
use crate::auth::Principal;
use crate::errors::ServiceError;

/// An email is taken once any hotel or customer holds it.
pub async fn email_in_use<C: ConnectionTrait>(db: &C, email: &str) -> Result<bool, ServiceError> {
    if hotel::find_by_email(db, email).await?.is_some() {
        return Ok(true);
    }
    Ok(customer::find_by_email(db, email).await?.is_some())
}

pub async fn current_hotel<C: ConnectionTrait>(db: &C, principal: &Principal) -> Result<hotel::Model, ServiceError> {
    principal.require(Role::Hotel)?;
    hotel::Entity::find_by_id(principal.id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("hotel"))
}

pub async fn current_customer<C: ConnectionTrait>(db: &C, principal: &Principal) -> Result<customer::Model, ServiceError> {
    principal.require(Role::Customer)?;
    customer::Entity::find_by_id(principal.id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("customer"))
}

/// Re-verify the owning hotel's password before a mutation.
pub async fn authenticate_hotel<C: ConnectionTrait>(db: &C, principal: &Principal, password: &str) -> Result<hotel::Model, ServiceError> {
    let h = current_hotel(db, principal).await?;
    verify_password(password, &h.password_hash).map_err(|_| ServiceError::wrong_credentials())?;
    Ok(h)
}
