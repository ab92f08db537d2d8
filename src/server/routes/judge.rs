// Judge-score prediction endpoint

use crate::ai;
use crate::models::JudgePredictionRequest;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::validation;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

/// POST /api/judge/predict
pub async fn predict_score(
    State(state): State<AppState>,
    Json(request): Json<JudgePredictionRequest>,
) -> Result<Json<Value>, ApiError> {
    let idea = validation::require_text(request.idea.as_deref(), "Idea")?;
    validation::check_length(&idea, "Idea", 0, 5000)?;
    let roadmap = validation::optional_text(request.roadmap.as_deref(), "Roadmap", 5000)?;
    let tech_stack = validation::optional_text(request.tech_stack.as_deref(), "Tech stack", 500)?;
    let team_size = request.parsed_team_size();
    if let Some(size) = team_size {
        validation::check_range(size, "Team size", 1, 20)?;
    }

    log::info!("Predicting judge scores for project");
    let prediction = ai::predict_judge_score(
        &state.ai,
        &idea,
        roadmap.as_deref().unwrap_or(""),
        tech_stack.as_deref().unwrap_or(""),
        team_size,
    )
    .await?;
    log::info!("Successfully generated judge prediction");

    Ok(Json(json!({
        "success": true,
        "prediction": prediction,
    })))
}
