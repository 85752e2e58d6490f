//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use eventhub_auth::gate::AuthGate;
use eventhub_core::config::AppConfig;
use eventhub_service::account::AccountService;
use eventhub_service::event::EventService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Resolves the calling account from Basic credentials
    pub auth_gate: Arc<AuthGate>,
    /// Event lifecycle service
    pub event_service: Arc<EventService>,
    /// Account registration service
    pub account_service: Arc<AccountService>,
}

impl AppState {
    /// Bundles the shared services.
    pub fn new(
        config: Arc<AppConfig>,
        auth_gate: Arc<AuthGate>,
        event_service: Arc<EventService>,
        account_service: Arc<AccountService>,
    ) -> Self {
        Self {
            config,
            auth_gate,
            event_service,
            account_service,
        }
    }
}
