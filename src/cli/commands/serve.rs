use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::config::ServerConfig;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config: ServerConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("AI8 analytics server starting up");
    debug!("Static directory: {}", config.static_dir.display());
    debug!("Bind address: {}", config.bind_address);

    if !config.index_path().is_file() {
        warn!(
            "No index.html under {}; build the frontend first (trunk build)",
            config.static_dir.display()
        );
    }

    let bind_address = config.bind_address.clone();
    let state = AppState::new(config);

    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Dashboard available at http://{}", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
