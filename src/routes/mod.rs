//! HTTP route handlers for the tarot API.
//!
//! Routes are grouped by concern, with per-group Cache-Control headers:
//! deck and spread listings are fixed data and cache for an hour, readings
//! are stateful and uncached, and health responses are never cached so the
//! liveness probe always sees a fresh answer.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request. CORS is wide open: the API serves browser frontends on other
//! origins.

pub mod cards;
pub mod health;
pub mod home;
pub mod reading;
pub mod spreads;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{
    CACHE_CONTROL_DECK, CACHE_CONTROL_HEALTH, CACHE_CONTROL_HOME, CACHE_CONTROL_STATIC,
};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Deck and spread listings - fixed data, cacheable
    let deck_routes = Router::new()
        .route("/cards", get(cards::list))
        .route("/spreads", get(spreads::list))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DECK),
        ));

    // Readings - stateful, no caching
    let reading_routes = Router::new()
        .route("/reading", post(reading::create))
        .route("/reading/{reading_id}", get(reading::view));

    // Landing page - short cache
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Health check - never cached, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ),
    );

    // Card imagery - long cache with immutable hint
    let static_routes = Router::new()
        .nest_service(
            "/static",
            ServeDir::new(&state.config.storage.static_dir),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    Router::new()
        .merge(deck_routes)
        .merge(reading_routes)
        .merge(home_routes)
        .merge(health_routes)
        .merge(static_routes)
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
