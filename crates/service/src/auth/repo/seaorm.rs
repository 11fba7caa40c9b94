use sea_orm::DatabaseConnection;

use models::{customer, hotel, Role};
use crate::auth::domain::Account;
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAuthRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, AuthError> {
        let found = hotel::find_by_email(&self.db, email)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        if let Some(h) = found {
            return Ok(Some(Account { id: h.id, email: h.email, role: Role::Hotel, password_hash: h.password_hash }));
        }
        let found = customer::find_by_email(&self.db, email)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(found.map(|c| Account { id: c.id, email: c.email, role: Role::Customer, password_hash: c.password_hash }))
    }
}
