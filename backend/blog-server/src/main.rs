use blog_server::{ServerResult, build_app_state, build_router, logger};

use blog_config::Config;

use std::path::PathBuf;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // Deployment secrets usually live in .env during development
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to read .env file: {e}");
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        log_file_path(&config)?,
        config.logging.colored,
    )?;

    info!("Starting blog-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let state = build_app_state(&config).await?;
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

/// Log file inside the config directory, created on demand.
fn log_file_path(config: &Config) -> ServerResult<Option<PathBuf>> {
    let Some(ref filename) = config.logging.file else {
        return Ok(None);
    };

    let log_dir = Config::config_dir()?.join(&config.logging.dir);
    std::fs::create_dir_all(&log_dir)?;

    Ok(Some(log_dir.join(filename)))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Server will only stop when the process is killed");
            std::future::pending::<()>().await;
        }
    }
}
