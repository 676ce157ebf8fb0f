use helm_backend::config::BackendConfig;
use helm_backend::module::craft::CraftManager;
use helm_backend::module::oracle::SensorOracle;
use helm_backend::{logging, service};

use anyhow::Result;
use std::path::Path;
use tracing::{error, info};

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = BackendConfig::load_or_default(CONFIG_PATH)?;

    // Initialize logging
    let _log_guard = logging::init_logging("logs", "helm-backend", &config.log_level);

    info!("Helm backend starting...");
    if Path::new(CONFIG_PATH).exists() {
        info!("Loaded configuration from {}", CONFIG_PATH);
    } else {
        info!("No {} found, using defaults", CONFIG_PATH);
    }
    info!("Server will listen on {}", config.server_address());

    // Validate the control panel directory before serving it
    let static_path = Path::new(&config.static_dir);
    if !static_path.exists() {
        error!("Static directory does not exist: {}", config.static_dir);
        anyhow::bail!("Static directory not found: {}", config.static_dir);
    }
    info!("Serving control panel from: {}", static_path.display());

    // One spacecraft record, one oracle, shared with every request
    let manager = CraftManager::new();
    let oracle = SensorOracle::new();
    let app = service::build_router(manager, oracle, &config);

    let addr = config.server_address();
    info!("Spacecraft backend is running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
