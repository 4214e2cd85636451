//! Souk admin dashboard server binary

use anyhow::Result;
use clap::Parser;
use souk_http::config::{BackendConfig, HttpConfig};
use souk_http::server::HttpServer;
use souk_http::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Souk admin dashboard - same-origin session proxy for the marketplace backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server (overrides SOUK_BIND_ADDR)
    #[arg(short, long)]
    bind: Option<std::net::SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("souk=debug,tower_http=debug")),
        )
        .init();

    let backend_config = BackendConfig::from_env();

    let mut http_config = HttpConfig::default();
    if let Ok(addr) = std::env::var("SOUK_BIND_ADDR") {
        http_config.bind_addr = addr.parse()?;
    }
    if let Some(bind) = cli.bind {
        http_config.bind_addr = bind;
    }

    let client = reqwest::Client::builder().build()?;

    info!(candidates = ?backend_config.candidates(), "resolving backend");
    let backend_base = backend_config.resolve(&client).await;
    info!(
        backend = %backend_base,
        app_url = %backend_config.app_url,
        ws_primary = %backend_config.ws_primary_url,
        ws_secondary = %backend_config.ws_secondary_url,
        "backend resolved"
    );

    let state = AppState::new(backend_base, client);
    let server = HttpServer::new(http_config.clone(), state);

    println!("Server running at: http://{}/", http_config.bind_addr);

    // Spawn server task
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.start().await {
            tracing::error!("Server error: {e}");
        }
    });

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("Received shutdown signal");
    server_handle.abort();

    Ok(())
}
