// Team profile endpoints

use crate::ai;
use crate::models::TeamProfile;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::validation;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// POST /api/teams/create is stateless: validate and echo the profile back
pub async fn create_team(
    Json(profile): Json<TeamProfile>,
) -> Result<Json<Value>, ApiError> {
    let name = profile
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::bad_request("Name and size are required"))?
        .to_string();
    let size = profile
        .effective_size()
        .ok_or_else(|| ApiError::bad_request("Name and size are required"))?;
    validation::check_range(size, "Team size", 1, 20)?;
    if let Some(experience) = profile.experience.as_deref() {
        validation::check_experience(experience)?;
    }
    if let Some(interests) = profile.interests.as_deref() {
        validation::check_length(interests, "Interests", 0, 500)?;
    }

    Ok(Json(json!({
        "name": name,
        "size": size,
        "skills": profile.skills.unwrap_or_default(),
        "techStack": profile.tech_stack.unwrap_or_default(),
        "experience": profile.experience.as_deref().unwrap_or("Intermediate"),
        "interests": profile.interests.as_deref().unwrap_or(""),
        "createdAt": Utc::now().to_rfc3339(),
    })))
}

/// POST /api/teams/suggest-topics
pub async fn suggest_topics(
    State(state): State<AppState>,
    Json(profile): Json<TeamProfile>,
) -> Result<Json<Value>, ApiError> {
    let size = profile
        .effective_size()
        .ok_or_else(|| ApiError::bad_request("Team size is required"))?;
    validation::check_range(size, "Team size", 1, 20)?;

    // Normalize the profile so downstream prompts see consistent fields
    let normalized = TeamProfile {
        team_size: Some(size),
        skills: Some(profile.skills.unwrap_or_default()),
        experience: Some(
            profile
                .experience
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Intermediate".to_string()),
        ),
        interests: Some(profile.interests.unwrap_or_default()),
        ..Default::default()
    };

    let topics = ai::suggest_topics(&state.ai, &normalized).await?;
    Ok(Json(json!({ "topics": topics })))
}
