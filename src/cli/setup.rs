use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");
const SAMPLE_CATALOG: &str = include_str!("../../docs/sample_funds.csv");

/// Writes the example configuration and sample catalog to the default
/// configuration directory.
pub fn setup() -> Result<PathBuf> {
    let dir = AppConfig::default_config_dir()?;
    setup_in_dir(dir)
}

/// Writes `config.yaml` and `funds.csv` into `dir`, returning the config
/// path. Refuses to overwrite an existing config. An existing catalog is
/// left untouched.
pub fn setup_in_dir<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let config_path = dir.join("config.yaml");

    if config_path.exists() {
        anyhow::bail!(
            "Configuration file already exists at {}",
            config_path.display()
        );
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write config file to {}", config_path.display()))?;
    tracing::info!("Created default configuration at {}", config_path.display());

    let catalog_path = dir.join("funds.csv");
    if catalog_path.exists() {
        tracing::info!("Keeping existing catalog at {}", catalog_path.display());
    } else {
        std::fs::write(&catalog_path, SAMPLE_CATALOG).with_context(|| {
            format!("Failed to write sample catalog to {}", catalog_path.display())
        })?;
        tracing::info!("Created sample catalog at {}", catalog_path.display());
    }

    Ok(config_path)
}
