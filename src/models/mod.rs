// Request and response models shared by the HTTP API and the AI pipeline

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single chat message exchanged with the OpenRouter API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    /// Opaque reasoning payload; passed back unmodified so the provider can
    /// continue an earlier reasoning chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_details: Option<Value>,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            reasoning_details: None,
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
            reasoning_details: None,
        }
    }
}

/// Body of POST /api/ideas/generate.
///
/// The structured fields are preferred; `context` remains as a free-text
/// channel for older clients and is pattern-matched best-effort. Structured
/// fields win when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeaRequest {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub team_size: Option<u32>,
}

/// Team profile accepted by the team endpoints and the roadmap generator.
///
/// Both `teamSize` and `size` are accepted; older clients send `size`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
}

impl TeamProfile {
    /// Team size regardless of which field name the client used
    pub fn effective_size(&self) -> Option<u32> {
        self.team_size.or(self.size)
    }
}

/// Body of POST /api/roadmaps/generate.
///
/// `projectIdea`/`teamProfile` are the current names; `idea`/`team` are kept
/// for older clients. The idea may be a plain string or an object carrying
/// `title`/`description`/`techStack`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    #[serde(default)]
    pub idea: Option<Value>,
    #[serde(default)]
    pub project_idea: Option<Value>,
    #[serde(default)]
    pub team: Option<TeamProfile>,
    #[serde(default)]
    pub team_profile: Option<TeamProfile>,
}

impl RoadmapRequest {
    pub fn project(&self) -> Option<&Value> {
        self.project_idea.as_ref().or(self.idea.as_ref())
    }

    pub fn team(&self) -> Option<&TeamProfile> {
        self.team_profile.as_ref().or(self.team.as_ref())
    }
}

/// Body of PUT /api/roadmaps/update-task (stateless acknowledgement only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap_id: Option<String>,
    #[serde(default)]
    pub phase_index: Option<u32>,
    #[serde(default)]
    pub task_index: Option<u32>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Body of POST /api/judge/predict
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgePredictionRequest {
    #[serde(default)]
    pub idea: Option<String>,
    #[serde(default)]
    pub roadmap: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<String>,
    /// Accepted as a number or a numeric string; null means unspecified
    #[serde(default)]
    pub team_size: Option<Value>,
}

impl JudgePredictionRequest {
    /// Parse the team size the way a form submission would arrive: number,
    /// numeric string, or absent
    pub fn parsed_team_size(&self) -> Option<u32> {
        match self.team_size.as_ref()? {
            Value::Number(n) => n.as_u64().map(|n| n as u32),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Body of POST /api/tech-stack/suggest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackRequest {
    #[serde(default)]
    pub idea: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub preferred_languages: Option<String>,
    #[serde(default)]
    pub roadmap: Option<String>,
}

/// A hackathon listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub name: String,
    pub organizer: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub mode: String,
    pub themes: Vec<String>,
    pub prizes: String,
    pub registration_link: String,
    pub status: String,
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_message_serializes_without_reasoning() {
        let message = ChatMessage::user("hello");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "hello");
        assert!(value.get("reasoning_details").is_none());
    }

    #[test]
    fn test_chat_message_preserves_reasoning_details() {
        let raw = json!({
            "role": "assistant",
            "content": "done",
            "reasoning_details": {"steps": ["a", "b"]}
        });
        let message: ChatMessage = serde_json::from_value(raw).unwrap();
        assert_eq!(message.reasoning_details, Some(json!({"steps": ["a", "b"]})));

        let round_tripped = serde_json::to_value(&message).unwrap();
        assert_eq!(round_tripped["reasoning_details"]["steps"][0], "a");
    }

    #[test]
    fn test_team_profile_effective_size_prefers_team_size() {
        let profile = TeamProfile {
            team_size: Some(5),
            size: Some(2),
            ..Default::default()
        };
        assert_eq!(profile.effective_size(), Some(5));

        let legacy = TeamProfile {
            size: Some(2),
            ..Default::default()
        };
        assert_eq!(legacy.effective_size(), Some(2));
    }

    #[test]
    fn test_roadmap_request_accepts_both_parameter_names() {
        let new_style: RoadmapRequest = serde_json::from_value(json!({
            "projectIdea": {"title": "App"},
            "teamProfile": {"teamSize": 4}
        }))
        .unwrap();
        assert_eq!(new_style.project().unwrap()["title"], "App");
        assert_eq!(new_style.team().unwrap().effective_size(), Some(4));

        let old_style: RoadmapRequest = serde_json::from_value(json!({
            "idea": "Build an app",
            "team": {"size": 2}
        }))
        .unwrap();
        assert_eq!(old_style.project().unwrap(), &json!("Build an app"));
        assert_eq!(old_style.team().unwrap().effective_size(), Some(2));
    }

    #[test]
    fn test_judge_request_team_size_variants() {
        let from_number: JudgePredictionRequest =
            serde_json::from_value(json!({"idea": "x", "teamSize": 4})).unwrap();
        assert_eq!(from_number.parsed_team_size(), Some(4));

        let from_string: JudgePredictionRequest =
            serde_json::from_value(json!({"idea": "x", "teamSize": "6"})).unwrap();
        assert_eq!(from_string.parsed_team_size(), Some(6));

        let from_null: JudgePredictionRequest =
            serde_json::from_value(json!({"idea": "x", "teamSize": null})).unwrap();
        assert_eq!(from_null.parsed_team_size(), None);
    }
}
