//! Resistor Bands Web Server Binary
//!
//! This binary starts the web server that exposes the resistor color-band
//! catalog and decoder as a REST API.
//!
//! # Usage
//!
//! ```bash
//! # Start with settings from the config file (default 127.0.0.1:5000)
//! resistor-bands-web
//!
//! # Override host and port
//! resistor-bands-web --host 0.0.0.0 --port 8080
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resistor_bands::config::Config;
use resistor_bands::web;

/// Resistor Bands Web Server - REST API for resistor color codes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Config file to read instead of the platform default
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => Config::config_file_path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    // Initialize tracing; RUST_LOG wins over --verbose and the config file
    let filter = if args.verbose {
        "debug"
    } else {
        config.logging.level.as_filter()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Config file: {}", config_path.display());

    let addr = config.server.socket_addr()?;

    web::run_server(addr).await
}
