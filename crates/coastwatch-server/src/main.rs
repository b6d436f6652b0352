//! Coastwatch API server binary.
//!
//! Wires together the in-memory registry and the Axum API. Startup
//! sequence:
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `coastwatch.yaml` (optional, defaults apply)
//! 3. Create the registry and application state
//! 4. Serve until the process is terminated

mod config;

use std::path::Path;

use coastwatch_api::{start_server, AppState, ServerConfig};
use coastwatch_registry::Registry;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Default configuration file path, relative to the working directory.
const CONFIG_PATH: &str = "coastwatch.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration parsing or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone())),
        )
        .with_target(true)
        .init();

    info!(
        host = %settings.server.host,
        port = settings.server.port,
        "coastwatch-server starting"
    );

    let state = AppState::new(Registry::new());
    let server_config = ServerConfig {
        host: settings.server.host.clone(),
        port: settings.server.port,
    };

    start_server(&server_config, state).await?;
    Ok(())
}

/// Load settings, treating a missing config file as "use defaults".
fn load_settings() -> Result<Settings, Box<dyn std::error::Error>> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        Ok(Settings::load(path)?)
    } else {
        Ok(Settings::default())
    }
}
