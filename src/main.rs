use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use postboard::api::PlaceholderClient;
use postboard::app::App;
use postboard::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing for logging
    let default_filter = if cli.debug { "postboard=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let directory = Arc::new(PlaceholderClient::new());

    // Create the application, load the user list, and run it
    let mut app = App::new(directory, cli.user);
    app.initialize().await?;
    app.run().await?;

    Ok(())
}
