// Roadmap generation endpoints

use crate::ai;
use crate::models::{RoadmapRequest, UpdateTaskRequest};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::server::validation;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// POST /api/roadmaps/generate
pub async fn generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<Value>, ApiError> {
    let project = request
        .project()
        .filter(|idea| !idea.is_null())
        .ok_or_else(|| ApiError::bad_request("Idea is required"))?;
    if let Some(text) = project.as_str() {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ApiError::bad_request("Idea is required"));
        }
        validation::check_length(trimmed, "Idea", 0, 5000)?;
    }
    let team = request.team();

    log::info!("Generating roadmap for project");
    let mut roadmap = ai::generate_roadmap(&state.ai, project, team).await?;
    log::info!("Successfully generated roadmap");

    // Echo the inputs alongside the roadmap, as clients re-render them
    if let Some(obj) = roadmap.as_object_mut() {
        obj.insert("projectIdea".to_string(), project.clone());
        obj.insert(
            "teamProfile".to_string(),
            team.map(|t| json!(t)).unwrap_or(Value::Null),
        );
        obj.insert("createdAt".to_string(), json!(Utc::now().to_rfc3339()));
    }
    Ok(Json(roadmap))
}

/// PUT /api/roadmaps/update-task: acknowledged but not persisted
pub async fn update_task(Json(request): Json<UpdateTaskRequest>) -> Json<Value> {
    log::debug!(
        "Task updated - Phase: {:?}, Task: {:?}, Completed: {:?}",
        request.phase_index,
        request.task_index,
        request.completed
    );

    Json(json!({
        "message": "Task updated",
        "phaseIndex": request.phase_index,
        "taskIndex": request.task_index,
        "completed": request.completed,
    }))
}
