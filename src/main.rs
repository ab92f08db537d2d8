// IdeaBot server binary

use anyhow::Result;
use clap::Parser;
use ideabot_lib::config::AppConfig;
use ideabot_lib::server::{self, AppState};
use ideabot_lib::shutdown;
use std::sync::Arc;

/// Stateless HTTP API for AI-assisted hackathon project planning
#[derive(Parser)]
#[command(name = "ideabot", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Address to bind to
    #[arg(long, env = "BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Comma-separated list of allowed CORS origins ("*" allows any)
    #[arg(long, env = "CORS_ORIGIN")]
    cors_origin: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed flags
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.clone()),
    )
    .init();

    let config = Arc::new(AppConfig::from_env(
        cli.port,
        cli.bind,
        cli.cors_origin,
        cli.log_level,
    ));
    config.log_summary();

    let state = AppState::new(config);
    shutdown::register_signal_handlers(state.shutdown_state.clone())?;

    server::run_server(state)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
