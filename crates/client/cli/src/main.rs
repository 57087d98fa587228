//! hexcrawl terminal entry point.
use anyhow::Result;
use hexcrawl_cli::{CliApp, CliConfig, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    logging::setup_logging(config.session_id.as_deref())?;
    for rejected in &config.rejected {
        tracing::warn!(%rejected, "ignoring configuration value");
    }

    CliApp::new(config).run().await
}
