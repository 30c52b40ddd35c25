use std::time::Duration;

use axum::{handler::Handler, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::handlers::{health::health_check, spa::spa_fallback};
use crate::schemas::AppState;

/// Create application router: health check, static bundle, SPA fallback.
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let assets = ServeDir::new(&state.config.static_dir)
        .fallback(spa_fallback.with_state(state.clone()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}
