//! HTTP server exposing the AI pipeline as a JSON API

mod error;
pub mod routes;
pub mod state;
pub mod validation;

pub use error::ApiError;
pub use state::AppState;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue,
    },
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with every API route wired to the state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index_handler))
        .route("/api/health", get(routes::health_handler))
        .route("/api/ideas/generate", post(routes::ideas::generate_idea))
        .route("/api/ideas", get(routes::ideas::list_ideas))
        .route("/api/ideas/:id/vote", post(routes::ideas::vote_idea))
        .route("/api/teams/create", post(routes::teams::create_team))
        .route(
            "/api/teams/suggest-topics",
            post(routes::teams::suggest_topics),
        )
        .route(
            "/api/roadmaps/generate",
            post(routes::roadmaps::generate_roadmap),
        )
        .route(
            "/api/roadmaps/update-task",
            put(routes::roadmaps::update_task),
        )
        .route(
            "/api/hackathons",
            get(routes::hackathons::list_hackathons),
        )
        .route(
            "/api/hackathons/add",
            post(routes::hackathons::add_hackathon),
        )
        .route("/api/judge/predict", post(routes::judge::predict_score))
        .route(
            "/api/tech-stack/suggest",
            post(routes::tech_stack::suggest),
        )
        .fallback(routes::not_found_handler)
        .with_state(state)
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(state: AppState) -> Result<(), String> {
    // Build CORS layer
    // Note: Using explicit headers instead of Any to avoid browser deprecation
    // warnings when the Authorization header is combined with a wildcard
    let cors = match &state.config.cors_origins {
        Some(origins) if !origins.is_empty() => {
            // Restricted CORS: only allow specified origins
            let allowed_origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods(Any)
                .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        }
        _ => {
            // Permissive CORS: allow any origin (default for development)
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        }
    };

    let app = build_router(state.clone()).layer(cors);

    let addr: SocketAddr = format!("{}:{}", state.config.bind, state.config.port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║                     IdeaBot Server                        ║");
    println!("╠══════════════════════════════════════════════════════════╣");
    println!("║  URL: http://{}:{:<38}  ║", state.config.bind, state.config.port);
    println!("║                                                           ║");
    println!("║  Endpoints:                                               ║");
    println!("║    POST /api/ideas/generate     - Generate project idea   ║");
    println!("║    POST /api/teams/suggest-topics - Suggest topics        ║");
    println!("║    POST /api/roadmaps/generate  - Generate roadmap        ║");
    println!("║    POST /api/judge/predict      - Predict judge scores    ║");
    println!("║    POST /api/tech-stack/suggest - Suggest tech stack      ║");
    println!("║    GET  /api/hackathons         - Hackathon listings      ║");
    println!("║    GET  /api/health             - Health check            ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    log::info!("IdeaBot server listening on http://{}", addr);

    // Create shutdown signal that waits for the shutdown state flag
    let shutdown_state = state.shutdown_state.clone();
    let shutdown_signal = async move {
        loop {
            if shutdown_state.is_shutdown_requested() {
                log::info!("Shutdown signal received, stopping server...");
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))
}
