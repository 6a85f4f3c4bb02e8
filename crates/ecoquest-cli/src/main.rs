//! Eco-Quest terminal entry point.

use std::error::Error;

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use ecoquest_cli::app;
use ecoquest_cli::config::{AppConfig, LogFormat};
use ecoquest_cli::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;

    // Logs go to stderr so they never interleave with the rendered screen.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }

    tracing::info!("Starting Eco-Quest");

    let state = AppState::from_config(&config).await?;
    app::run(state, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    Ok(())
}
