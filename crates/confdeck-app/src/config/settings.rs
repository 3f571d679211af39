//! Settings loader for confdeck/config.toml

use std::path::{Path, PathBuf};

use confdeck_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFDECK_DIR: &str = "confdeck";

/// Environment variable overriding the configured server URL.
pub const SERVER_ENV_VAR: &str = "CONFDECK_SERVER";

/// Default location of the settings file.
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFDECK_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the given path, or the default location.
///
/// A missing or unparseable file falls back to defaults with a log line;
/// startup never fails on configuration. The `CONFDECK_SERVER` env var,
/// when set, overrides the server URL from any source.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    let mut settings = read_settings(&config_path);

    if let Ok(url) = std::env::var(SERVER_ENV_VAR) {
        if !url.trim().is_empty() {
            debug!("Server URL overridden by {}", SERVER_ENV_VAR);
            settings.server.url = url;
        }
    }

    settings
}

fn read_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
