//! Router
//!
//! Wires the API routes, the landing page and the static fallback.

use std::sync::Arc;

use axum::routing::{get, get_service};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::AnimalStore;

use super::handlers;

/// Build the axum router with the API and static routes.
pub fn build_router(config: &Config, store: Arc<AnimalStore>) -> Router {
    Router::new()
        .route("/", get_service(ServeFile::new(config.index_file())))
        .route(
            "/api/animals",
            get(handlers::list_animals).post(handlers::create_animal),
        )
        // Non-strict trailing slash on the collection route
        .route(
            "/api/animals/",
            get(handlers::list_animals).post(handlers::create_animal),
        )
        .route("/api/animals/:id", get(handlers::get_animal))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
