use pr_auth::{Argon2PasswordHasher, JwtValidator};
use pr_core::{PersonService, UploadPolicy};
use pr_db::SqlitePersonRepository;
use pr_server::{AppState, FsBlobStore, build_router, error::ServerError, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = pr_config::Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir).map_err(|e| ServerError::Directory {
                path: log_dir.display().to_string(),
                source: e,
            })?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database (migrations run on open)
    let database_path = config.database_path()?;
    let pool = pr_db::open(&database_path).await.map_err(ServerError::from)?;
    info!("Database ready at {}", database_path.display());

    // Picture storage
    let upload_dir = config.upload_dir()?;
    let blobs = FsBlobStore::new(&upload_dir);
    blobs
        .ensure_root()
        .await
        .map_err(|e| ServerError::Directory {
            path: upload_dir.display().to_string(),
            source: e,
        })?;
    info!("Pictures stored in {}", upload_dir.display());

    let service = PersonService::new(
        Arc::new(SqlitePersonRepository::new(pool.clone())),
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(blobs),
        UploadPolicy::new(config.upload.min_size_bytes, &config.upload.extension),
    );

    let app_state = AppState {
        service: Arc::new(service),
        jwt_validator: Arc::new(JwtValidator::with_hs256(config.auth.secret_bytes())),
        pool: pool.clone(),
        upload_dir,
        max_upload_bytes: usize::try_from(config.upload.max_size_bytes).unwrap_or(usize::MAX),
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual address matters when port is 0 (auto-assigned)
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
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
