pub mod config;
pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use routes::{add::add, fallback::not_found, health::healthz};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn app() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/add", get(add))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
