//! Insight Agent: a text-analysis HTTP service.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from a TOML file, initializes tracing, applies the
//! listening-port override, builds the Axum router, and starts the HTTP
//! server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use insight_agent::config::{
    AppConfig, ConfigError, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, ENV_PORT,
};
use insight_agent::http::server::start_server;
use insight_agent::routes::create_router;

/// Insight Agent: analyze customer feedback text over HTTP
#[derive(Parser, Debug)]
#[command(name = "insight-agent", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "insight_agent=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listening port (overrides the PORT env var and the config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; defaults apply when the file is absent
    let mut config = AppConfig::load_or_default(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Listening port with priority: CLI > env > config
    if let Some(port) = args.port {
        config.http.port = port;
    } else if let Ok(port) = std::env::var(ENV_PORT) {
        config.http.port = port.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid {} value: {}", ENV_PORT, port))
        })?;
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    // Create router and start the server
    let app = create_router();
    let addr = config.http.bind_addr()?;
    start_server(app, addr).await?;

    Ok(())
}
