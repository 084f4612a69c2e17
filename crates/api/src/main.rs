use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arbolado_api::config::{ServerConfig, DEFAULT_ADMIN_PASSWORD};
use arbolado_api::router::build_app_router;
use arbolado_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arbolado_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = arbolado_db::create_pool(&config.database_path)
        .await
        .expect("Failed to open database");
    tracing::info!(path = %config.database_path.display(), "Database connection pool created");

    arbolado_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    arbolado_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Seed data (idempotent, runs every start) ---
    arbolado_db::seed::seed_catalogos(&pool).await;

    let admin_hash = arbolado_api::auth::password::hash_password(&config.admin_password)
        .expect("Failed to hash administrator password");
    let admin_created =
        arbolado_db::seed::seed_admin(&pool, "Administrador", &config.admin_email, &admin_hash)
            .await
            .expect("Failed to seed administrator account");

    if admin_created {
        tracing::info!(email = %config.admin_email, "Default administrator created");
        if config.admin_password == DEFAULT_ADMIN_PASSWORD {
            tracing::warn!("ADMIN_PASSWORD not set; the administrator uses the dev default");
        }
    }

    // --- App state & router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
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
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
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
