use std::path::PathBuf;

use axum::Router;

use crate::config::ServerConfig;
use crate::router::create_router;
use crate::schemas::AppState;

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}

/// Config pointing at the checked-in fixture bundle.
pub fn fixture_config() -> ServerConfig {
    ServerConfig {
        bind_address: "127.0.0.1:0".to_string(),
        static_dir: testdata("dist"),
        request_timeout_secs: 30,
    }
}

/// Config pointing at a directory that does not exist.
pub fn missing_config() -> ServerConfig {
    ServerConfig {
        static_dir: testdata("no-such-bundle"),
        ..fixture_config()
    }
}

pub fn setup_test_app(config: ServerConfig) -> Router {
    create_router(AppState::new(config))
}
