pub mod cli;
pub mod core;

use crate::cli::OutputFormat;
use crate::core::config::AppConfig;
use crate::core::profile::UserProfile;
use anyhow::{Result, bail};
use std::path::PathBuf;
use tracing::{debug, info};

/// A command that needs the fund catalog.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Recommend {
        profile: UserProfile,
        top_n: Option<usize>,
        catalog: Option<PathBuf>,
        format: OutputFormat,
    },
    Catalog {
        catalog: Option<PathBuf>,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Fund recommender starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Recommend {
            profile,
            top_n,
            catalog,
            format,
        } => {
            let catalog = crate::core::load_catalog(catalog_path(catalog, &config)?)?;
            let top_n = top_n.unwrap_or(config.top_n);
            debug!(?profile, top_n, "Recommending funds");
            cli::recommend::run(&profile, &catalog, top_n, format)
        }
        AppCommand::Catalog { catalog } => {
            let catalog = crate::core::load_catalog(catalog_path(catalog, &config)?)?;
            cli::catalog::run(&catalog);
            Ok(())
        }
    }
}

fn catalog_path(cli_override: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    if let Some(path) = cli_override.or_else(|| config.resolved_catalog_path()) {
        return Ok(path);
    }
    bail!("No fund catalog configured. Run `mfrec setup` or pass --catalog <FILE>")
}
