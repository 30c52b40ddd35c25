use std::net::SocketAddr;
use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "workspace/frontend/dist";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid bind address '{0}', expected IP:PORT")]
    InvalidBindAddress(String),
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Server settings after defaults, `ai8.toml`, `AI8_*` variables and CLI
/// flags have been layered, in that order.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_dir: PathBuf,
    pub request_timeout_secs: u64,
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let file = match &overrides.config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::with_name("ai8").required(false),
        };

        let config = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("static_dir", DEFAULT_STATIC_DIR)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .add_source(file)
            .add_source(Environment::with_prefix("AI8"))
            .set_override_option("bind_address", overrides.bind_address)?
            .set_override_option(
                "static_dir",
                overrides
                    .static_dir
                    .map(|dir| dir.to_string_lossy().into_owned()),
            )?
            .build()?;

        let server: ServerConfig = config.try_deserialize()?;
        server.validate()?;
        debug!(?server, "configuration loaded");
        Ok(server)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidBindAddress(self.bind_address.clone()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_file(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
    }

    #[test]
    fn cli_overrides_win_over_file() {
        let config = ServerConfig::load(ConfigOverrides {
            config_file: Some(fixture_file("ai8.toml")),
            bind_address: Some("127.0.0.1:9000".into()),
            static_dir: None,
        })
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.static_dir, PathBuf::from("testdata/dist"));
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = ServerConfig::load(ConfigOverrides {
            config_file: Some(fixture_file("does-not-exist.toml")),
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn bind_address_must_be_a_socket_address() {
        let config = ServerConfig {
            bind_address: "localhost".into(),
            static_dir: PathBuf::from("dist"),
            request_timeout_secs: 30,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBindAddress(addr)) if addr == "localhost"
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ServerConfig {
            bind_address: "127.0.0.1:3000".into(),
            static_dir: PathBuf::from("dist"),
            request_timeout_secs: 0,
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
    }
}
