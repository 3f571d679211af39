//! Configuration types for ConfDeck

use serde::{Deserialize, Serialize};

use confdeck_core::prelude::*;
use confdeck_core::ResourceName;

/// Application settings (`~/.config/confdeck/config.toml`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    /// Resource tabs offered for editing, in display order.
    #[serde(default = "default_resources")]
    pub resources: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            resources: default_resources(),
        }
    }
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the backend exposing `/api/file` and `/api/restart`.
    #[serde(default = "default_server_url")]
    pub url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_resources() -> Vec<String> {
    vec!["config.json".to_string(), "queue.json".to_string()]
}

impl Settings {
    /// The configured resource list as validated names, skipping (and
    /// logging) entries that fail validation.
    pub fn resource_names(&self) -> Vec<ResourceName> {
        self.resources
            .iter()
            .filter_map(|raw| match ResourceName::new(raw.clone()) {
                Ok(name) => Some(name),
                Err(_) => {
                    warn!("Skipping invalid resource name in settings: {:?}", raw);
                    None
                }
            })
            .collect()
    }
}
