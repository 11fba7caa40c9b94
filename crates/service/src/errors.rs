use thiserror::Error;

use models::errors::ModelError;
use crate::auth::errors::AuthError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("{message}")]
    HasOpenReservations { message: String, availability_updated: bool },
    #[error("no availability: {0}")]
    NoAvailability(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("token error: {0}")]
    Token(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn wrong_credentials() -> Self { Self::Authentication("wrong credentials".into()) }

    /// Stable numeric code for logs and response bodies
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 2001,
            ServiceError::NotFound(_) => 2002,
            ServiceError::Conflict(_) => 2003,
            ServiceError::Authentication(_) => 2004,
            ServiceError::Forbidden(_) => 2005,
            ServiceError::HasOpenReservations { .. } => 2101,
            ServiceError::NoAvailability(_) => 2102,
            ServiceError::Hash(_) => 2201,
            ServiceError::Token(_) => 2202,
            ServiceError::Db(_) => 2300,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => ServiceError::Validation(m),
            ModelError::Duplicate(m) => ServiceError::Conflict(m),
            ModelError::Db(m) => ServiceError::Db(m),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ModelError::from(e).into() }
}

impl From<AuthError> for ServiceError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(m) => ServiceError::Validation(m),
            AuthError::Unauthorized => ServiceError::wrong_credentials(),
            AuthError::InvalidToken(m) => ServiceError::Authentication(m),
            AuthError::Forbidden(m) => ServiceError::Forbidden(m),
            AuthError::HashError(m) => ServiceError::Hash(m),
            AuthError::TokenError(m) => ServiceError::Token(m),
            AuthError::Repository(m) => ServiceError::Db(m),
        }
    }
}
