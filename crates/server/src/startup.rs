use std::{env, future::Future, net::SocketAddr};

use axum::Router;
use models::db::{self, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bind address and database settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
    pub database: DatabaseConfig,
}

impl Settings {
    /// Settings from an already loaded config, or from env vars when there is
    /// none.
    pub fn resolve(cfg: Option<&configs::AppConfig>) -> Result<Self, StartupError> {
        let (host, port, database) = match cfg {
            Some(cfg) => (cfg.server.host.clone(), cfg.server.port, DatabaseConfig::from(&cfg.database)),
            None => {
                let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
                let port = env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse::<u16>().ok())
                    .unwrap_or(8000);
                (host, port, DatabaseConfig::from_env())
            }
        };
        let addr = format!("{}:{}", host, port)
            .parse()
            .map_err(|e| StartupError::InvalidConfig(format!("bind address {host}:{port}: {e}")))?;
        Ok(Self { addr, database })
    }
}

/// Connect, create the schema and build the router.
pub async fn build_app(database: &DatabaseConfig) -> Result<Router, StartupError> {
    let conn = db::connect_with_config(database).await?;
    db::init_schema(&conn).await?;
    Ok(routes::build_router(ServerState::new(conn), build_cors()))
}

/// Run the HTTP server until Ctrl+C.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    run_until(settings, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    })
    .await
}

/// Run the HTTP server until `shutdown` resolves, then drain open requests.
pub async fn run_until<F>(settings: Settings, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&settings.database).await?;

    let listener = tokio::net::TcpListener::bind(settings.addr)
        .await
        .map_err(StartupError::from)?;
    info!(addr = %settings.addr, "contacts api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
