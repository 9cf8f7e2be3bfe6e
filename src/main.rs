use anyhow::Result;
use career_compass::cli::{handle_command, Cli};
use career_compass::logging::init_logging;
use career_compass::AppConfig;
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging first
    init_logging(cli.verbose)?;

    let config = AppConfig::load()?;

    if let Err(e) = handle_command(cli, config).await {
        error!("Command failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
