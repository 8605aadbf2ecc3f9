use api::auth::middleware::log_request;
use api::routes::routes;
use api::state::AppState;
use axum::{Router, middleware::from_fn};
use common::config;
use db::storage::{DatabaseStorage, MemoryStorage, Storage};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    // Set up the storage backend. The memory backend is volatile by design;
    // the database backend expects a migrated database.
    let storage: Arc<dyn Storage> = match config::storage_backend().as_str() {
        "memory" => {
            tracing::warn!("using in-memory storage; all data is lost on shutdown");
            Arc::new(MemoryStorage::new())
        }
        _ => Arc::new(DatabaseStorage::new(db::connect().await)),
    };
    let app_state = AppState::new(storage);

    // Spawn periodic cleanup of expired and revoked sessions
    spawn_session_purger(app_state.clone());

    // Configure middleware
    let cors = CorsLayer::very_permissive();

    // Build app router
    let app = Router::new()
        .nest("/api", routes(app_state.clone()))
        .layer(from_fn(log_request))
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config::host(), config::port())
        .parse()
        .expect("Invalid address");

    println!(
        "Starting {} on http://{}:{}",
        config::project_name(),
        config::host(),
        config::port()
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}

fn init_logging(log_file: &str, _log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let log_to_stdout = config::log_to_stdout();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(true);

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}

/// Deletes expired and revoked sessions on an interval so the session table
/// does not grow without bound. A failed sweep is logged and retried on the
/// next tick.
fn spawn_session_purger(app_state: AppState) {
    let interval = Duration::from_secs(config::session_purge_seconds());
    let storage = app_state.storage_clone();

    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            match storage.purge_expired_sessions().await {
                Ok(0) => {}
                Ok(purged) => tracing::info!(purged, "removed expired sessions"),
                Err(e) => tracing::warn!(error = %e, "session purge failed"),
            }
        }
    });
}
