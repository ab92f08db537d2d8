// Process configuration assembled once at startup
//
// Values come from CLI flags, environment variables, and a .env file loaded
// by the binary before parsing. The resulting config is injected into the
// server state instead of being read ambiently per request.

use std::env;

/// Immutable process configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenRouter bearer credential; AI endpoints fail eagerly when missing
    pub openrouter_api_key: Option<String>,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Address the HTTP server binds to
    pub bind: String,
    /// Allowed CORS origins; None means permissive (any origin)
    pub cors_origins: Option<Vec<String>>,
    /// Deployment environment (development, production, test)
    pub environment: String,
    /// Log level filter applied at startup
    pub log_level: String,
}

impl AppConfig {
    /// Build the configuration from CLI-provided values plus the process
    /// environment (OPENROUTER_API_KEY, APP_ENV)
    pub fn from_env(
        port: u16,
        bind: String,
        cors_origin: Option<String>,
        log_level: String,
    ) -> Self {
        let openrouter_api_key = env::var("OPENROUTER_API_KEY").ok();
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        Self::build(
            openrouter_api_key,
            port,
            bind,
            cors_origin,
            environment,
            log_level,
        )
    }

    /// Assemble a config from already-resolved values, normalizing blank
    /// credentials and wildcard CORS settings
    pub fn build(
        openrouter_api_key: Option<String>,
        port: u16,
        bind: String,
        cors_origin: Option<String>,
        environment: String,
        log_level: String,
    ) -> Self {
        let openrouter_api_key = openrouter_api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let cors_origins = cors_origin
            .filter(|origin| origin.trim() != "*")
            .map(|origin| {
                origin
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        Self {
            openrouter_api_key,
            port,
            bind,
            cors_origins,
            environment,
            log_level,
        }
    }

    /// Whether the OpenRouter credential is configured
    pub fn has_api_key(&self) -> bool {
        self.openrouter_api_key.is_some()
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Log the startup configuration summary (never prints the credential)
    pub fn log_summary(&self) {
        let cors_display = match &self.cors_origins {
            Some(origins) => origins.join(", "),
            None => "*".to_string(),
        };

        log::info!("=== Environment Configuration ===");
        log::info!("Environment: {}", self.environment);
        log::info!("Server address: {}:{}", self.bind, self.port);
        log::info!("CORS origin: {}", cors_display);
        log::info!("Log level: {}", self.log_level);
        log::info!(
            "OpenRouter API key: {}",
            if self.has_api_key() {
                "configured"
            } else {
                "missing"
            }
        );
        log::info!("=================================");

        if !self.has_api_key() {
            log::error!(
                "OPENROUTER_API_KEY is not set; AI endpoints will fail until it is configured"
            );
        }
        if self.is_production() && self.cors_origins.is_none() {
            log::warn!("CORS_ORIGIN should be set to a specific domain in production, not \"*\"");
        }
    }
}
