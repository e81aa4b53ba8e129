//! Cointrack - a terminal crypto and stock tracker.

use anyhow::Context;
use cointrack::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to a file; stdout belongs to the terminal UI.
    let log_dir = cointrack::config::log_dir().context("Failed to resolve log directory")?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "cointrack.log");
    let (log_writer, _log_guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cointrack=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(log_writer),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default().context("Failed to load configuration")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting cointrack");

    // Run the application
    let mut app = App::new(config).context("Failed to start terminal UI")?;
    app.run().await?;

    Ok(())
}
