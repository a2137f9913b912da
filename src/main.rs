use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use search_page::api::{AppState, create_router};
use search_page::config::Config;
use tracing_subscriber::EnvFilter;

/// Serves the search page.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Address to listen on, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides PORT
    #[arg(long)]
    port: Option<u16>,

    /// Directory served for unmatched paths, overrides STATIC_DIR
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_dir = static_dir;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_target(true)
        .init();

    let state = AppState::from_config(&config).context("failed to load page templates")?;
    let app = create_router(Arc::new(state));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("serving search page on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
