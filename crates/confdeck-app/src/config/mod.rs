//! Configuration file parsing for ConfDeck
//!
//! Supports `~/.config/confdeck/config.toml` plus a `CONFDECK_SERVER`
//! environment override; the binary's flags take final precedence.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, SERVER_ENV_VAR};
pub use types::{ServerSettings, Settings};
