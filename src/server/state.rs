//! Server application state shared across handlers

use crate::ai::OpenRouterClient;
use crate::config::AppConfig;
use crate::shutdown::ShutdownState;
use std::sync::Arc;
use std::time::Instant;

/// Shared state for the server: the startup configuration, the OpenRouter
/// gateway, and the shutdown flag. Cheap to clone; handlers receive it via
/// axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    /// Process configuration, constructed once at startup
    pub config: Arc<AppConfig>,

    /// OpenRouter gateway shared by all AI endpoints
    pub ai: Arc<OpenRouterClient>,

    /// Shutdown state
    pub shutdown_state: ShutdownState,

    /// Process start time, for the health endpoint's uptime report
    pub started_at: Instant,
}

impl AppState {
    /// Create the server state, wiring the gateway to the configured credential
    pub fn new(config: Arc<AppConfig>) -> Self {
        let ai = Arc::new(OpenRouterClient::new(config.openrouter_api_key.clone()));
        Self::with_client(config, ai)
    }

    /// Create the server state with a caller-supplied gateway (tests inject a
    /// client pointed at a mock server)
    pub fn with_client(config: Arc<AppConfig>, ai: Arc<OpenRouterClient>) -> Self {
        Self {
            config,
            ai,
            shutdown_state: ShutdownState::new(),
            started_at: Instant::now(),
        }
    }
}
