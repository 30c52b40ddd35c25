use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::{ConfigOverrides, ServerConfig};
use commands::{check_assets, serve};

#[derive(Parser)]
#[command(name = "ai8-analytics")]
#[command(about = "AI visibility analytics dashboard: static app server and tooling")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON). `ai8.toml` in the working
    /// directory is picked up automatically when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the compiled dashboard bundle
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Directory holding the built frontend (index.html, wasm, js)
        #[arg(short, long, env = "STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },
    /// Verify that the frontend bundle exists; exits non-zero otherwise
    CheckAssets {
        /// Directory holding the built frontend
        #[arg(short, long, env = "STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                static_dir,
            } => {
                let config = ServerConfig::load(ConfigOverrides {
                    config_file: self.config,
                    bind_address,
                    static_dir,
                })?;
                serve(config).await?;
            }
            Commands::CheckAssets { static_dir } => {
                let config = ServerConfig::load(ConfigOverrides {
                    config_file: self.config,
                    bind_address: None,
                    static_dir,
                })?;
                check_assets(&config).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_are_optional() {
        let cli = Cli::try_parse_from(["ai8-analytics", "serve", "--bind-address", "127.0.0.1:8080"]).unwrap();
        match cli.command {
            Commands::Serve { bind_address, .. } => {
                assert_eq!(bind_address.as_deref(), Some("127.0.0.1:8080"));
            }
            Commands::CheckAssets { .. } => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["ai8-analytics", "check-assets", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
