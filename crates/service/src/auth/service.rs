use std::str::FromStr;
use std::sync::Arc;

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{AuthSession, Claims, LoginInput, Principal};
use super::errors::AuthError;
use super::password::verify_password;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self { jwt_secret: jwt_secret.into(), token_ttl_hours: 12 }
    }
}

impl From<&configs::AuthConfig> for AuthConfig {
    fn from(c: &configs::AuthConfig) -> Self {
        Self { jwt_secret: c.jwt_secret.clone(), token_ttl_hours: c.token_ttl_hours }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Authenticate a hotel or customer and issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{Account, LoginInput};
    /// use service::auth::password::hash_password;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// repo.insert(Account { id: uuid::Uuid::new_v4(), email: "h@e.com".into(), role: models::Role::Hotel, password_hash: hash_password("Passw0rd").unwrap() });
    /// let svc = AuthService::new(repo, AuthConfig::new("secret"));
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "h@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.principal.role, models::Role::Hotel);
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let account = self.repo
            .find_account_by_email(&input.email)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        verify_password(&input.password, &account.password_hash)?;

        let principal = account.principal();
        let token = self.issue_token(&principal)?;
        info!(account_id = %principal.id, role = %principal.role, "login_succeeded");
        Ok(AuthSession { principal, token })
    }

    pub fn issue_token(&self, principal: &Principal) -> Result<String, AuthError> {
        let exp = (chrono::Utc::now() + chrono::Duration::hours(self.cfg.token_ttl_hours)).timestamp() as usize;
        let claims = Claims { sub: principal.email.clone(), uid: principal.id.to_string(), role: principal.role, exp };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Validate signature and expiry, then rebuild the caller.
    pub fn decode_principal(&self, token: &str) -> Result<Principal, AuthError> {
        let data = decode::<Claims>(token, &DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes()), &Validation::default())
            .map_err(|e| {
                debug!(error = %e, "token_rejected");
                AuthError::InvalidToken(e.to_string())
            })?;
        let id = Uuid::from_str(&data.claims.uid).map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        Ok(Principal { id, email: data.claims.sub, role: data.claims.role })
    }
}
