use cm_config::Config;
use cm_db::PoolSettings;
use cm_server::{AppState, bootstrap, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open database and run migrations
    let database_path = config.database_path()?;
    let settings = PoolSettings {
        max_connections: config.database.max_connections,
        busy_timeout: config.busy_timeout(),
    };
    let pool = cm_db::connect(&database_path, &settings).await?;

    bootstrap::seed_doctor(&pool, &config.bootstrap).await?;

    let bind_addr = config.bind_addr();
    let app = build_router(AppState::new(pool.clone(), config));

    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            // Without a signal handler, keep serving until the process is killed
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
