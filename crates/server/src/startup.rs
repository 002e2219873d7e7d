use std::future::Future;
use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use service::parcel::{ParcelService, SeaOrmParcelStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the database, make sure the parcels table exists and build the router on top of it.
pub async fn build_app(db_cfg: &DatabaseConfig) -> anyhow::Result<Router> {
    common::env::ensure_sqlite_dir(&db_cfg.url).await?;
    let db = models::db::connect_with_config(db_cfg).await?;
    models::db::ensure_schema(&db).await?;

    let parcels = ParcelService::new(Arc::new(SeaOrmParcelStore::new(db)));
    Ok(routes::build_router(AppState::new(parcels), build_cors()))
}

/// Public entry: build the app and serve until Ctrl+C.
/// Expects the caller to have installed the tracing subscriber.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg.database).await?;
    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    serve(listener, app, shutdown_signal()).await
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "starting parcel server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("parcel server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}
