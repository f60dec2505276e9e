pub mod create_video;
pub mod health;
pub mod metrics;

use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Upload cap stated in the form copy, enforced here.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Build the application router: form UI, submission proxy, health check.
/// The Prometheus scrape endpoint is attached separately in `main` since it
/// carries its own state.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Static UI (embedded at compile time)
        .route(
            "/",
            get(|| async { Html(include_str!("../../static/index.html")) }),
        )
        // API endpoints
        .route("/health", get(health::health_check))
        .route(
            "/api/create-video",
            post(create_video::create_video).options(create_video::preflight),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES))
}
