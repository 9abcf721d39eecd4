//! Configuration module for searx-pdbe
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "SEARX_PDBE_SETTINGS_PATH";

/// Candidate settings file locations, in lookup order
pub fn settings_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        paths.push(PathBuf::from(path));
    }

    paths.push(PathBuf::from("settings.yml"));
    paths.push(PathBuf::from("config/settings.yml"));
    paths.push(PathBuf::from("/etc/searx-pdbe/settings.yml"));

    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("searx-pdbe/settings.yml"));
    }

    paths
}

/// Load settings from an explicit file, the first existing default location,
/// or defaults, then apply environment overrides
pub fn load(explicit: Option<PathBuf>) -> Result<Settings> {
    let mut settings = match explicit {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => match settings_paths().into_iter().find(|p| p.exists()) {
            Some(path) => {
                info!("Loading settings from: {}", path.display());
                Settings::from_file(&path)?
            }
            None => {
                info!("No settings file found, using defaults");
                Settings::default()
            }
        },
    };

    settings.merge_env();
    Ok(settings)
}
