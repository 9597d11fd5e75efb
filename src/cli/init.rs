//! Init command implementation

use anyhow::{Result, bail};
use std::path::PathBuf;

use legal_eagle::config::Config;

/// Write a default config file
pub async fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::default().save_to_file(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_init_writes_loadable_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init_command(Some(path.clone()), false).await.unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());

        assert!(init_command(Some(path.clone()), false).await.is_err());
        init_command(Some(path), true).await.unwrap();
    }
}
