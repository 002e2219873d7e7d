pub mod parcels;

use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;
use service::parcel::{ParcelService, SeaOrmParcelStore};

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub parcels: ParcelService<SeaOrmParcelStore>,
}

impl AppState {
    pub fn new(parcels: ParcelService<SeaOrmParcelStore>) -> Self { Self { parcels } }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let parcels = Router::new()
        .route("/parcels", get(parcels::list).post(parcels::create))
        .route("/parcels/:number", get(parcels::get).delete(parcels::delete))
        .route("/parcels/:number/address", put(parcels::set_address))
        .route("/parcels/:number/status", put(parcels::set_status));

    Router::new()
        .route("/health", get(health))
        .merge(parcels)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
