use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;
use wikiquiz_server::{Secrets, WikiQuizConfig, connect, create_router, init_observability};

#[derive(Parser, Debug)]
#[command(author, version, about = "WikiQuiz generator API server", long_about = None)]
struct Args {
    /// Extra configuration file, applied after the default locations
    #[arg(short, long, env = "WIKIQUIZ_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind (overrides server.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = WikiQuizConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let secrets = Secrets::from_env()?;
    init_observability(&config.logging, secrets.is_production())?;

    info!(
        app_env = %secrets.app_env,
        model = %config.model.name,
        "Starting WikiQuiz server"
    );

    let state = connect(&config, &secrets).await?;
    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
