// Hackathon listing endpoints

use crate::hackathons::{builtin_hackathons, filter_hackathons};
use crate::server::error::ApiError;
use crate::server::validation;
use axum::extract::Query;
use axum::Json;
use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HackathonFilters {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// GET /api/hackathons: static listings filtered by query params
pub async fn list_hackathons(Query(filters): Query<HackathonFilters>) -> Json<Value> {
    let listings = filter_hackathons(
        builtin_hackathons(),
        filters.status.as_deref(),
        filters.region.as_deref(),
        filters.mode.as_deref(),
    );
    Json(serde_json::json!(listings))
}

/// POST /api/hackathons/add: validated and echoed back; nothing is stored
pub async fn add_hackathon(Json(hackathon): Json<Value>) -> Result<Json<Value>, ApiError> {
    let title = validation::require_text(hackathon["title"].as_str(), "Title")?;
    validation::check_length(&title, "Title", 3, 200)?;

    if let Some(description) = hackathon["description"].as_str() {
        validation::check_length(description, "Description", 0, 2000)?;
    }
    if let Some(url) = hackathon["url"].as_str() {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ApiError::bad_request("URL must be valid"));
        }
    }
    if let Some(deadline) = hackathon["deadline"].as_str() {
        if DateTime::parse_from_rfc3339(deadline).is_err() {
            return Err(ApiError::bad_request("Deadline must be a valid date"));
        }
    }

    log::debug!("Hackathon submitted (stateless mode - not persisted)");
    Ok(Json(hackathon))
}
