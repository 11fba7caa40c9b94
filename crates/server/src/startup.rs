use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use service::auth::service::AuthConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

const DEV_JWT_SECRET: &str = "dev-secret-change-me";

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolved process settings: `config.toml` when valid, environment otherwise.
struct Settings {
    bind: SocketAddr,
    database: DatabaseConfig,
    auth: AuthConfig,
}

fn bind_addr(host: &str, port: u16) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {}", host, port, e)))
}

fn load_settings() -> Result<Settings, StartupError> {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => Ok(Settings {
            bind: bind_addr(&cfg.server.host, cfg.server.port)?,
            database: DatabaseConfig::from(&cfg.database),
            auth: AuthConfig::from(&cfg.auth),
        }),
        Err(e) => {
            warn!(error = %e, "config.toml unavailable, falling back to environment");
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            let jwt_secret = env::var("JWT_SECRET").ok().filter(|s| !s.trim().is_empty()).unwrap_or_else(|| {
                warn!("JWT_SECRET not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            });
            Ok(Settings {
                bind: bind_addr(&host, port)?,
                database: DatabaseConfig::from_env(),
                auth: AuthConfig::new(jwt_secret),
            })
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let settings = load_settings()?;

    let db = connect_with_config(&settings.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");

    let state = AppState::new(db, settings.auth);
    let app: Router = routes::build_router(state, build_cors());

    info!(addr = %settings.bind, "starting staywell server");
    let listener = tokio::net::TcpListener::bind(settings.bind).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}
