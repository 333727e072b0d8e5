use crate::core::recommend::DEFAULT_TOP_N;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Fund catalog file. Relative paths are resolved against the directory
    /// holding the config file.
    pub catalog_path: Option<String>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_path: None,
            top_n: DEFAULT_TOP_N,
            base_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_dir() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "mfrec", "mfrec")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }

    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// The catalog file to load, with relative paths anchored at the config
    /// file's directory.
    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        let raw = PathBuf::from(self.catalog_path.as_ref()?);
        match &self.base_dir {
            Some(base) if raw.is_relative() => Some(base.join(raw)),
            _ => Some(raw),
        }
    }
}
