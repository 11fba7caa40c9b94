use thiserror::Error;

/// Failures of login, hashing and token handling.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("wrong email or password")]
    Unauthorized,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("password hashing failed: {0}")]
    HashError(String),
    #[error("token signing failed: {0}")]
    TokenError(String),
    #[error("account lookup failed: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for logs
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::Unauthorized => 1002,
            AuthError::InvalidToken(_) => 1003,
            AuthError::Forbidden(_) => 1004,
            AuthError::HashError(_) => 1101,
            AuthError::TokenError(_) => 1102,
            AuthError::Repository(_) => 1200,
        }
    }
}
