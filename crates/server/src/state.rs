use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::repo::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService};

/// Shared by every handler; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: Arc<AuthService<SeaOrmAuthRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, auth: AuthConfig) -> Self {
        let repo = Arc::new(SeaOrmAuthRepository::new(db.clone()));
        Self { db, auth: Arc::new(AuthService::new(repo, auth)) }
    }
}
