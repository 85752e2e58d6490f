//! EventHub Server: event publishing REST API.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use eventhub_api::{AppState, build_router};
use eventhub_auth::{Argon2Hasher, AuthGate, PasswordHasher};
use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;
use eventhub_database::{
    AccountRepository, AccountStore, DatabasePool, EventRepository, EventStore,
};
use eventhub_service::{AccountService, EventService};

#[tokio::main]
async fn main() {
    let env = std::env::var("EVENTHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. `RUST_LOG` wins over the configured level.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting EventHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        eventhub_database::migration::run_migrations(db.pool()).await?;
    }

    // ── Stores ───────────────────────────────────────────────────
    let accounts: Arc<dyn AccountStore> = Arc::new(AccountRepository::new(db.pool().clone()));
    let events: Arc<dyn EventStore> = Arc::new(EventRepository::new(db.pool().clone()));

    // ── Auth + services ──────────────────────────────────────────
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_config(&config.auth)?);
    let auth_gate = Arc::new(AuthGate::new(Arc::clone(&accounts), Arc::clone(&hasher)));
    let event_service = Arc::new(EventService::new(events));
    let account_service = Arc::new(AccountService::new(
        accounts,
        hasher,
        config.auth.password_min_length,
    ));

    if let Some(admin) = &config.auth.admin {
        let account = account_service
            .seed_admin(&admin.email, &admin.password)
            .await?;
        tracing::info!(account_id = %account.id, "Administrator account ready");
    }

    // ── HTTP server ──────────────────────────────────────────────
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = AppState::new(Arc::new(config), auth_gate, event_service, account_service);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!(address = %addr, "EventHub server listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.wait_for(|stop| *stop).await;
            })
            .await
    });

    // ── Graceful shutdown ────────────────────────────────────────
    tokio::select! {
        joined = &mut server => {
            db.close().await;
            return match joined {
                Ok(result) => result.map_err(|e| AppError::internal(format!("Server error: {e}"))),
                Err(e) => Err(AppError::internal(format!("Server task failed: {e}"))),
            };
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        }
    }

    let _ = shutdown_tx.send(true);
    match tokio::time::timeout(grace, server).await {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(e))) => tracing::error!(error = %e, "Server error during shutdown"),
        Ok(Err(e)) => tracing::error!(error = %e, "Server task failed during shutdown"),
        Err(_) => tracing::warn!(
            grace_seconds = grace.as_secs(),
            "Grace period elapsed with requests still in flight"
        ),
    }

    db.close().await;
    tracing::info!("EventHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
