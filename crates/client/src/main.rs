//! Fighter select client binary.
//!
//! Composition root: reads configuration, sets up logging, loads the roster
//! and hands it to the selected frontend.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Built-in roster
//! cargo run -p fighter-select
//!
//! # Custom roster, five columns, legacy unlocked confirmation
//! SELECT_ROSTER_PATH=roster.toml SELECT_GRID_COLUMNS=5 \
//!     SELECT_CONFIRM_POLICY=permissive cargo run -p fighter-select
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
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use client_frontend_core::FrontendApp;
    use select_content::RosterLoader;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(cli_config.session_id.as_deref())?;

    tracing::info!("Starting fighter select");
    tracing::info!("Roster: {:?}", frontend_config.roster_path);
    tracing::info!("Confirm delay: {:?}", frontend_config.confirm.delay);

    // 3. Load the roster
    let roster = RosterLoader::load_or_builtin(frontend_config.roster_path.as_deref())
        .context("failed to load fighter roster")?;

    // 4. Build and run the frontend
    let frontend = CliFrontend::new(frontend_config, cli_config, roster);
    frontend.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
