use axum::{extract::State, response::Json};
use tracing::{instrument, warn};

use crate::schemas::{AppState, AssetStatus, HealthResponse};

/// Health check endpoint
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let index = state.config.index_path();
    let assets = match tokio::fs::try_exists(&index).await {
        Ok(true) => AssetStatus::Present,
        Ok(false) => AssetStatus::Missing,
        Err(e) => {
            warn!("Could not check {}: {}", index.display(), e);
            AssetStatus::Missing
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        assets,
    })
}
