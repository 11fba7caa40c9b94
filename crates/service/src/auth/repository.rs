use async_trait::async_trait;

use super::domain::Account;
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Hotel or customer owning this email, if any.
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        accounts: Mutex<HashMap<String, Account>>, // key: lowercase email
    }

    impl MockAuthRepository {
        pub fn insert(&self, account: Account) {
            let mut accounts = self.accounts.lock().unwrap();
            accounts.insert(account.email.to_ascii_lowercase(), account);
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, AuthError> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts.get(&email.trim().to_ascii_lowercase()).cloned())
        }
    }
}
