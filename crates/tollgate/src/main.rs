//! Tollgate CLI binary.

use anyhow::Result;
use tollgate::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the tollgate CLI.
///
/// Uses tokio's current_thread runtime. `search --async` still offloads onto
/// tokio's blocking pool, and rayon runs the parallel filter.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=tollgate=debug cargo run -- demo
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tollgate=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting tollgate CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Tollgate CLI completed successfully");
    Ok(())
}
