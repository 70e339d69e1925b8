//! Battle screen client binary.
//!
//! Composition root that loads configuration, installs logging and runs the
//! selected host adapter until the host ends the session.
//!
//! # Features
//!
//! - `frontend-cli`: stdio host adapter (default)
//!
//! # Examples
//!
//! ```bash
//! # Replay a recorded session
//! battle-screen < session.txt
//!
//! # Let the host close the screen instead of sending a quit command
//! HOST_SUPPORTS_CLOSE=true battle-screen
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the stdio host adapter.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use client_frontend_core::Frontend;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the log file on drop
    let _logging = logging::init(&cli_config.logging)?;

    tracing::info!("Starting battle screen");
    tracing::info!("Host close support: {}", cli_config.host.supports_close);
    tracing::debug!(?frontend_config, "frontend configuration");

    // 3. Build and run the adapter
    let mut frontend = CliFrontend::stdio(frontend_config, &cli_config)?;
    frontend.run().await?;

    tracing::info!("Battle screen exited");
    Ok(())
}
