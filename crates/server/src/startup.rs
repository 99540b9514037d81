use std::{net::SocketAddr, sync::Arc};

use axum::http::{HeaderValue, Method};
use axum::Router;
use configs::{AppConfig, CorsConfig, ServerConfig};
use migration::MigratorTrait;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::routes::{self, ServerState};
use service::student::repo::SeaOrmStudentRepository;

/// CORS restricted to the configured origins.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any))
}

fn load_bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app from a loaded config and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("schema up to date");
    }

    let state = ServerState::new(Arc::new(SeaOrmStudentRepository::new(db)));
    let cors = build_cors(&cfg.cors)?;
    let app: Router = routes::build_router(state, cors, &cfg.server.context_path);

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, context_path = %cfg.server.context_path, origins = ?cfg.cors.allowed_origins, "starting student service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
