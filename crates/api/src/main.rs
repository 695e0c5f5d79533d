use std::net::SocketAddr;
use std::sync::Arc;

use ceral_db::store::{PgProjectStore, ProjectStore};
use ceral_media::filesystem::FilesystemBlobStore;
use ceral_media::s3::S3BlobStore;
use ceral_media::BlobStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ceral_api::config::{MediaBackend, MediaConfig, ServerConfig};
use ceral_api::router::build_app_router;
use ceral_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "ceral_api=debug,ceral_pipeline=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    let media_config = MediaConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        purge_media_on_delete = config.purge_media_on_delete,
        "Loaded server configuration"
    );

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = ceral_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    ceral_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    ceral_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let store: Arc<dyn ProjectStore> = Arc::new(PgProjectStore::new(pool));

    // --- Media storage ---
    let blobs: Arc<dyn BlobStore> = match &media_config.backend {
        MediaBackend::Local { root } => Arc::new(
            FilesystemBlobStore::new(root.clone(), media_config.public_url.clone())
                .await
                .expect("Failed to initialise local media directory"),
        ),
        MediaBackend::S3 { bucket, endpoint } => Arc::new(
            S3BlobStore::from_env(
                bucket.clone(),
                media_config.public_url.clone(),
                endpoint.as_deref(),
            )
            .await,
        ),
    };
    tracing::info!(
        backend = ?media_config.backend,
        public_url = %media_config.public_url,
        "Media storage ready"
    );

    // --- App state ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let state = AppState::new(store, blobs, config, media_config.upload_timeout());

    // --- Router ---
    let app = build_app_router(state, media_config.local_root().map(|p| p.as_path()));

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
