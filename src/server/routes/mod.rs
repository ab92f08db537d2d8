//! Route handlers grouped by API domain
//!
//! - ideas: idea generation
//! - teams: team profiles and topic suggestions
//! - roadmaps: roadmap generation and task acknowledgements
//! - hackathons: static hackathon listings
//! - judge: judge-score prediction
//! - tech_stack: tech stack and architecture suggestions

pub mod hackathons;
pub mod ideas;
pub mod judge;
pub mod roadmaps;
pub mod teams;
pub mod tech_stack;

use super::state::AppState;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use sysinfo::System;

/// Root route: welcome payload listing the available endpoints
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to IdeaBot API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "ideas": "/api/ideas",
            "teams": "/api/teams",
            "roadmaps": "/api/roadmaps",
            "hackathons": "/api/hackathons",
            "judge": "/api/judge",
            "techStack": "/api/tech-stack",
            "health": "/api/health"
        }
    }))
}

/// Health check: uptime, memory, and whether the upstream credential is set
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime": state.started_at.elapsed().as_secs_f64(),
        "timestamp": Utc::now().to_rfc3339(),
        "environment": state.config.environment,
        "memory": process_memory(),
        "apiKey": if state.config.has_api_key() { "configured" } else { "missing" },
    }))
}

/// Resident and virtual memory of this process, in bytes
fn process_memory() -> Value {
    let mut system = System::new();
    system.refresh_processes(sysinfo::ProcessesToUpdate::All, true);

    let process = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| system.process(pid));
    match process {
        Some(process) => json!({
            "rss": process.memory(),
            "virtualMemory": process.virtual_memory(),
        }),
        None => json!(null),
    }
}

/// 404 handler for unknown routes
pub async fn not_found_handler(uri: Uri) -> (StatusCode, Json<Value>) {
    log::warn!("Route not found: {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "path": uri.path(),
        })),
    )
}
