//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, checks the Trello credentials
//! and starts the server with the configured transport.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use trello_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Logs go to stderr; stdout belongs to the STDIO transport
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    if let Err(lines) = config.trello.check_credentials() {
        for line in lines {
            error!("{}", line);
        }
        std::process::exit(1);
    }

    let server = McpServer::new(config.clone())?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `MCP_LOG_LEVEL` sets the base level; `RUST_LOG` directives refine it.
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
