//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, refuses to start without a
//! Brevo API key, and runs the server on the configured transport.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use brevo_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first so configuration warnings are visible
    init_logging(&Config::log_level_from_env());

    // Load configuration from environment
    let config = Config::from_env();

    if !config.brevo.has_api_key() {
        error!("BREVO_API_KEY environment variable is required");
        eprintln!("Error: BREVO_API_KEY environment variable is required");
        std::process::exit(1);
    }

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config)?;

    info!("Starting {} v{}", server.name(), server.version());

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for the STDIO transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
