//! `config.toml` loading for the StayWell server.
//!
//! Every section is optional; missing secrets and the database URL are taken
//! from the environment during `normalize_and_validate`.

use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; 0 or absent means 4.
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool: PoolConfig,
    /// Echo SQL statements through sqlx logging.
    pub log_statements: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 2,
            connect_timeout_secs: 30,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 3600,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: String::new(), token_ttl_hours: 12 }
    }
}

/// `CONFIG_PATH` if set, `config.toml` otherwise.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("parsing configuration")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Read the file at [`config_path`], apply env fallbacks and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = Self::from_path(config_path())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.auth.normalize_from_env();
        self.auth.validate()
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = ServerConfig::default().host;
        }
        ensure!(self.port != 0, "server.port must be within 1..=65535");
        if matches!(self.worker_threads, None | Some(0)) {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.url.trim().is_empty(), "database.url is empty; set it in config.toml or DATABASE_URL");
        let scheme = self.url.split(':').next().unwrap_or_default().to_ascii_lowercase();
        if !matches!(scheme.as_str(), "postgres" | "postgresql" | "sqlite") {
            bail!("database.url scheme `{}` is not supported (postgres or sqlite)", scheme);
        }
        self.pool.validate()
    }
}

impl PoolConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.min_connections >= 1, "database.pool.min_connections must be >= 1");
        ensure!(
            self.max_connections >= self.min_connections,
            "database.pool.max_connections must be >= min_connections"
        );
        ensure!(
            self.connect_timeout_secs > 0 && self.acquire_timeout_secs > 0,
            "database.pool timeouts must be positive seconds"
        );
        Ok(())
    }
}

impl AuthConfig {
    pub fn normalize_from_env(&mut self) {
        if self.jwt_secret.trim().is_empty() {
            if let Ok(secret) = std::env::var("JWT_SECRET") {
                self.jwt_secret = secret;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.jwt_secret.trim().is_empty(), "auth.jwt_secret is empty; set it in config.toml or JWT_SECRET");
        ensure!(self.token_ttl_hours > 0, "auth.token_ttl_hours must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [server]
        host = "0.0.0.0"
        port = 9000
        worker_threads = 0

        [database]
        url = "postgres://staywell:pw@localhost:5432/staywell"

        [database.pool]
        max_connections = 8

        [auth]
        jwt_secret = "s3cret"
    "#;

    fn db(url: &str, min: u32, max: u32) -> DatabaseConfig {
        DatabaseConfig {
            url: url.into(),
            pool: PoolConfig { min_connections: min, max_connections: max, ..PoolConfig::default() },
            log_statements: false,
        }
    }

    #[test]
    fn parses_and_fills_defaults() {
        let mut cfg = AppConfig::from_toml_str(FULL).unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.database.pool.max_connections, 8);
        assert_eq!(cfg.database.pool.min_connections, 2);
        assert_eq!(cfg.auth.token_ttl_hours, 12);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.database.pool, PoolConfig::default());
    }

    #[test]
    fn database_url_schemes() {
        assert!(db("mysql://localhost/db", 1, 2).validate().is_err());
        assert!(db("sqlite::memory:", 1, 1).validate().is_ok());
        assert!(db("postgresql://localhost/db", 1, 1).validate().is_ok());
    }

    #[test]
    fn rejects_pool_bounds_inverted() {
        assert!(db("sqlite::memory:", 4, 2).validate().is_err());
        assert!(db("sqlite::memory:", 0, 2).validate().is_err());
    }

    #[test]
    fn rejects_non_positive_token_ttl() {
        let auth = AuthConfig { jwt_secret: "x".into(), token_ttl_hours: 0 };
        assert!(auth.validate().is_err());
    }
}
