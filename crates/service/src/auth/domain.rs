use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::Role;
use super::errors::AuthError;

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Authenticated caller, passed explicitly into every protected operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl Principal {
    pub fn require(&self, role: Role) -> Result<(), AuthError> {
        if self.role != role {
            return Err(AuthError::Forbidden(format!("{} account required", role)));
        }
        Ok(())
    }

    pub fn is_hotel(&self) -> bool { self.role == Role::Hotel }
}

/// Stored account as seen by the login flow (hotel or customer)
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

impl Account {
    pub fn principal(&self) -> Principal {
        Principal { id: self.id, email: self.email.clone(), role: self.role }
    }
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: String,
    pub role: Role,
    pub exp: usize,
}

/// Login result (session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub principal: Principal,
    pub token: String,
}
