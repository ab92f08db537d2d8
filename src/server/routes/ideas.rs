// Idea generation endpoints

use crate::ai::{self, context};
use crate::models::GenerateIdeaRequest;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::validation;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

/// POST /api/ideas/generate
pub async fn generate_idea(
    State(state): State<AppState>,
    Json(request): Json<GenerateIdeaRequest>,
) -> Result<Json<Value>, ApiError> {
    let domain = validation::require_text(request.domain.as_deref(), "Domain")?;
    validation::check_length(&domain, "Domain", 2, 100)?;
    let context_text = validation::optional_text(request.context.as_deref(), "Context", 1000)?
        .unwrap_or_default();
    if let Some(experience) = request.experience.as_deref() {
        validation::check_experience(experience)?;
    }
    if let Some(size) = request.team_size {
        validation::check_range(size, "Team size", 1, 20)?;
    }

    // Structured fields win; the free-text shim only fills the gaps
    let mut profile = context::parse_context(&context_text);
    if let Some(tech_stack) = request.tech_stack.filter(|t| !t.trim().is_empty()) {
        profile.tech_stack = Some(tech_stack.trim().to_string());
    }
    if let Some(skills) = request.skills.filter(|s| !s.trim().is_empty()) {
        profile.skills = Some(skills.trim().to_string());
    }
    if let Some(experience) = request.experience {
        profile.experience = experience;
    }
    if let Some(size) = request.team_size {
        profile.team_size = size;
    }

    log::info!("Generating idea for domain: {}", domain);
    let idea =
        ai::generate_idea_with_profile(&state.ai, &domain, &context_text, &profile).await?;

    if let Some(title) = idea["title"].as_str() {
        log::info!("Successfully generated idea: {}", title);
    }
    Ok(Json(idea))
}

/// GET /api/ideas: stateless mode stores nothing, so the list is empty
pub async fn list_ideas() -> Json<Value> {
    log::debug!("Fetching ideas - returning empty array (stateless mode)");
    Json(json!([]))
}

/// POST /api/ideas/:id/vote: acknowledged but not persisted
pub async fn vote_idea(Path(_id): Path<String>) -> Json<Value> {
    log::debug!("Vote recorded (stateless mode - not persisted)");
    Json(json!({ "message": "Vote recorded", "votes": 1 }))
}
