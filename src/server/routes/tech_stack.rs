// Tech stack suggestion endpoint
//
// This endpoint wraps both success and error bodies in a `success` flag.

use crate::ai;
use crate::models::TechStackRequest;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::validation;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

/// POST /api/tech-stack/suggest
pub async fn suggest(
    State(state): State<AppState>,
    Json(request): Json<TechStackRequest>,
) -> Result<Json<Value>, ApiError> {
    let idea = validation::require_text(request.idea.as_deref(), "Project idea")
        .map_err(ApiError::with_success_flag)?;
    validation::check_length(&idea, "Idea", 0, 5000).map_err(ApiError::with_success_flag)?;
    let domain = validation::require_text(request.domain.as_deref(), "Domain")
        .map_err(ApiError::with_success_flag)?;
    validation::check_length(&domain, "Domain", 0, 100).map_err(ApiError::with_success_flag)?;
    let preferred_languages = validation::optional_text(
        request.preferred_languages.as_deref(),
        "Preferred languages",
        500,
    )
    .map_err(ApiError::with_success_flag)?;
    let roadmap = validation::optional_text(request.roadmap.as_deref(), "Roadmap", 5000)
        .map_err(ApiError::with_success_flag)?;

    log::info!("Suggesting tech stack for domain: {}", domain);
    let suggestion = ai::suggest_tech_stack(
        &state.ai,
        &idea,
        &domain,
        preferred_languages.as_deref().unwrap_or(""),
        roadmap.as_deref().unwrap_or(""),
    )
    .await
    .map_err(|e| ApiError::from(e).with_success_flag())?;

    Ok(Json(json!({
        "success": true,
        "suggestion": suggestion,
    })))
}
