//! ConfDeck - a terminal cockpit for editing a service's configuration
//! documents over HTTP
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use confdeck_app::config;
use confdeck_client::HttpBackend;

/// ConfDeck - edit remote configuration documents from the terminal
#[derive(Parser, Debug)]
#[command(name = "confdeck")]
#[command(about = "Edit a service's configuration documents over HTTP", long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file and CONFDECK_SERVER)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Path to an alternate settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Resource to edit (repeatable; overrides the configured tab list)
    #[arg(long = "resource", value_name = "NAME")]
    resources: Vec<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    confdeck_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    if let Some(server) = args.server {
        settings.server.url = server;
    }
    if !args.resources.is_empty() {
        settings.resources = args.resources;
    }

    info!(
        server = %settings.server.url,
        resources = ?settings.resources,
        "starting session"
    );

    let backend = HttpBackend::new(
        &settings.server.url,
        Duration::from_secs(settings.server.timeout_secs),
    )?;

    confdeck_tui::run(settings, Arc::new(backend)).await?;
    Ok(())
}
