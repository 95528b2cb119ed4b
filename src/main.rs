use clap::Parser;
use std::sync::Arc;
use terminal_shop_rust::config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use terminal_shop_rust::menu::{AppState, MockMenu};
use terminal_shop_rust::router::create_app_router;

#[derive(Parser)]
#[command(
    name = "terminal-shop-mcp",
    about = "MCP server exposing a coffee menu and ordering actions over HTTP",
    version
)]
struct Cli {
    /// Listen host (IP address).
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Listen port.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Simulated latency of the mock menu backend, in milliseconds.
    #[arg(long, env = "MOCK_LATENCY_MS", default_value_t = 0)]
    latency_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_parts(&cli.host, cli.port, cli.latency_ms)?;

    // Initialize application state
    let backend = MockMenu::new().with_latency(config.backend_latency);
    let state = Arc::new(AppState::new(Arc::new(backend)));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("MCP server listening at http://{}", config.addr);
    tracing::info!("Root MCP endpoint: POST http://{}/mcp", config.addr);
    tracing::info!(
        "Actions available at: POST http://{}/mcp/actions/{{actionName}}",
        config.addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
