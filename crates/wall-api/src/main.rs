//! Wall API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p wall-api
//! ```
//!
//! Configuration is loaded from environment variables.

use tracing::{error, info};
use wall_common::{try_init_tracing, AppConfig};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Wall API Server...");

    // Missing credentials are fatal: no view is served without them
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    wall_api::run(config).await?;

    Ok(())
}
