// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::import, state::AppState};

/// Assembles the main application router.
///
/// * Mounts the import routes under `/api/import`.
/// * Caps request bodies at `Config::max_import_bytes`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Config).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let import_routes = Router::new()
        .route("/parse", post(import::parse_import))
        .route("/preview", post(import::preview_import))
        .route("/formats", get(import::list_formats))
        .layer(DefaultBodyLimit::max(state.config.max_import_bytes));

    Router::new()
        .nest("/api/import", import_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
