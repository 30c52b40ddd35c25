use anyhow::{bail, Result};
use tracing::{debug, info};

use crate::config::ServerConfig;

/// Fails when the frontend bundle has not been built into `static_dir`.
pub async fn check_assets(config: &ServerConfig) -> Result<()> {
    let index = config.index_path();
    debug!("Looking for {}", index.display());

    if !tokio::fs::try_exists(&index).await? {
        bail!(
            "frontend bundle missing: {} not found (run `trunk build` in workspace/frontend)",
            index.display()
        );
    }

    let mut entries = tokio::fs::read_dir(&config.static_dir).await?;
    let mut files = 0usize;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            files += 1;
        }
    }

    info!(
        "Frontend bundle present in {} ({} files)",
        config.static_dir.display(),
        files
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixture_config, missing_config};

    #[tokio::test]
    async fn fixture_bundle_passes() {
        assert!(check_assets(&fixture_config()).await.is_ok());
    }

    #[tokio::test]
    async fn missing_bundle_fails() {
        let err = check_assets(&missing_config()).await.unwrap_err();
        assert!(err.to_string().contains("frontend bundle missing"));
    }
}
