// Extraction and validation of JSON payloads embedded in model replies
//
// Models are asked to answer with a single JSON document but routinely wrap
// it in prose or markdown. This module pulls the first balanced JSON span out
// of the raw reply, validates it against the feature's required shape, and
// resolves every failure to the caller-supplied fallback payload. Parse and
// shape problems never escape as errors.

use chrono::Utc;
use serde_json::{json, Map, Value};

/// The AI features whose replies are normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Idea,
    Topics,
    Roadmap,
    JudgeScore,
    TechStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
}

/// Required score entries of a judge prediction
const JUDGE_SCORE_FIELDS: [&str; 5] = [
    "innovationScore",
    "feasibilityScore",
    "technicalDepthScore",
    "impactScore",
    "presentationScore",
];

impl Feature {
    /// Whether the feature's reply is an object or an array
    pub fn shape(&self) -> Shape {
        match self {
            Feature::Topics => Shape::Array,
            _ => Shape::Object,
        }
    }

    /// The timestamp field stamped onto the normalized payload, if any.
    /// Topic lists are arrays and carry no timestamp.
    fn timestamp_key(&self) -> Option<&'static str> {
        match self {
            Feature::Idea | Feature::Roadmap => Some("createdAt"),
            Feature::JudgeScore | Feature::TechStack => Some("timestamp"),
            Feature::Topics => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Feature::Idea => "idea",
            Feature::Topics => "topics",
            Feature::Roadmap => "roadmap",
            Feature::JudgeScore => "judge score",
            Feature::TechStack => "tech stack",
        }
    }
}

/// Normalize a raw model reply into the feature's response shape.
///
/// On extraction or validation failure the fallback is returned instead;
/// both paths get a freshly stamped timestamp. This never fails: the caller
/// always receives a well-shaped payload.
pub fn normalize(raw: &str, feature: Feature, fallback: Value) -> Value {
    match extract_and_validate(raw, feature) {
        Ok(mut value) => {
            if feature == Feature::Roadmap {
                coerce_roadmap(&mut value);
            }
            stamp_timestamp(&mut value, feature);
            value
        }
        Err(reason) => {
            log::warn!(
                "Failed to parse {} reply, using fallback: {}",
                feature.name(),
                reason
            );
            let mut fallback = fallback;
            stamp_timestamp(&mut fallback, feature);
            fallback
        }
    }
}

fn extract_and_validate(raw: &str, feature: Feature) -> Result<Value, String> {
    let span = extract_json_span(raw, feature.shape())
        .ok_or_else(|| "no JSON payload found in reply".to_string())?;
    let value: Value =
        serde_json::from_str(span).map_err(|e| format!("invalid JSON in reply: {}", e))?;
    validate(&value, feature)?;
    Ok(value)
}

/// Locate the JSON span inside a raw reply.
///
/// Takes the first balanced span (quote- and escape-aware), so prose that
/// mentions a smaller example object before the real payload picks the first
/// complete document rather than smearing across both. If no span closes,
/// falls back to the widest first-open-to-last-close slice and lets the JSON
/// parser reject it.
pub fn extract_json_span(raw: &str, shape: Shape) -> Option<&str> {
    let (open, close) = match shape {
        Shape::Object => ('{', '}'),
        Shape::Array => ('[', ']'),
    };

    if let Some(span) = balanced_span(raw, open, close) {
        return Some(span);
    }

    let start = raw.find(open)?;
    let end = raw.rfind(close)?;
    if end > start {
        Some(&raw[start..=end])
    } else {
        None
    }
}

fn balanced_span(raw: &str, open: char, close: char) -> Option<&str> {
    let start = raw.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if c == '"' {
            in_string = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(&raw[start..start + offset + close.len_utf8()]);
            }
        }
    }

    None
}

/// Check the feature-specific required keys and shapes
fn validate(value: &Value, feature: Feature) -> Result<(), String> {
    match feature {
        Feature::Idea | Feature::Roadmap => {
            if !value.is_object() {
                return Err("expected a JSON object".to_string());
            }
            Ok(())
        }
        Feature::Topics => {
            if !value.is_array() {
                return Err("expected a JSON array of topics".to_string());
            }
            Ok(())
        }
        Feature::JudgeScore => validate_judge_score(value),
        Feature::TechStack => validate_tech_stack(value),
    }
}

fn validate_judge_score(value: &Value) -> Result<(), String> {
    for field in JUDGE_SCORE_FIELDS {
        let entry = value
            .get(field)
            .ok_or_else(|| format!("missing score entry '{}'", field))?;
        if !entry["score"].is_number() {
            return Err(format!("'{}' has a non-numeric score", field));
        }
        let has_reason = entry["reason"].as_str().is_some_and(|s| !s.is_empty());
        let has_improvement = entry["improvement"].as_str().is_some_and(|s| !s.is_empty());
        if !has_reason || !has_improvement {
            return Err(format!("'{}' is missing reason or improvement", field));
        }
    }
    if !value["overallWinningProbability"].is_number() {
        return Err("missing numeric overallWinningProbability".to_string());
    }
    Ok(())
}

fn validate_tech_stack(value: &Value) -> Result<(), String> {
    for field in ["techStack", "architecture", "development"] {
        if value.get(field).map(|v| v.is_null()).unwrap_or(true) {
            return Err(format!("missing '{}' section", field));
        }
    }
    Ok(())
}

/// Reshape roadmap phases into their uniform form: alias `phase` to `name`
/// and coerce every task entry into `{title, description, completed}`
fn coerce_roadmap(value: &mut Value) {
    let Some(phases) = value.get_mut("phases").and_then(|p| p.as_array_mut()) else {
        return;
    };

    for phase in phases {
        let Some(obj) = phase.as_object_mut() else {
            continue;
        };

        if !obj.contains_key("name") {
            if let Some(name) = obj.get("phase").cloned() {
                obj.insert("name".to_string(), name);
            }
        }

        let tasks = obj
            .get("tasks")
            .and_then(|t| t.as_array())
            .cloned()
            .unwrap_or_default();
        let coerced: Vec<Value> = tasks.into_iter().map(coerce_task).collect();
        obj.insert("tasks".to_string(), Value::Array(coerced));
    }
}

fn coerce_task(task: Value) -> Value {
    match task {
        Value::String(title) => json!({
            "title": title,
            "description": "",
            "completed": false,
        }),
        Value::Object(mut map) => {
            map.entry("title").or_insert_with(|| json!(""));
            map.entry("description").or_insert_with(|| json!(""));
            let completed = map
                .get("completed")
                .and_then(|c| c.as_bool())
                .unwrap_or(false);
            map.insert("completed".to_string(), json!(completed));
            Value::Object(map)
        }
        other => json!({
            "title": other.to_string(),
            "description": "",
            "completed": false,
        }),
    }
}

fn stamp_timestamp(value: &mut Value, feature: Feature) {
    let Some(key) = feature.timestamp_key() else {
        return;
    };
    if let Some(obj) = value.as_object_mut() {
        obj.insert(key.to_string(), json!(Utc::now().to_rfc3339()));
    } else if value.is_null() {
        // Fallbacks are always objects; guard against a null placeholder
        let mut map = Map::new();
        map.insert(key.to_string(), json!(Utc::now().to_rfc3339()));
        *value = Value::Object(map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_object_surrounded_by_prose() {
        let raw = "Sure! Here is the idea:\n\n{\"title\": \"App\"}\n\nGood luck!";
        let span = extract_json_span(raw, Shape::Object).unwrap();
        assert_eq!(span, "{\"title\": \"App\"}");
    }

    #[test]
    fn test_extracts_first_balanced_span_among_multiple_fragments() {
        let raw = r#"For example {"a": 1} but the real answer is {"b": 2}"#;
        let span = extract_json_span(raw, Shape::Object).unwrap();
        assert_eq!(span, r#"{"a": 1}"#);
    }

    #[test]
    fn test_braces_inside_strings_do_not_close_the_span() {
        let raw = r#"{"note": "use {curly} braces", "ok": true} trailing"#;
        let span = extract_json_span(raw, Shape::Object).unwrap();
        let value: Value = serde_json::from_str(span).unwrap();
        assert_eq!(value["ok"], true);
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let raw = r#"{"quote": "she said \"hi\" {", "n": 1}"#;
        let span = extract_json_span(raw, Shape::Object).unwrap();
        let value: Value = serde_json::from_str(span).unwrap();
        assert_eq!(value["n"], 1);
    }

    #[test]
    fn test_array_shape_extraction() {
        let raw = "Topics below:\n[{\"title\": \"One\"}, {\"title\": \"Two\"}]\nEnjoy";
        let span = extract_json_span(raw, Shape::Array).unwrap();
        let value: Value = serde_json::from_str(span).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_no_json_returns_none() {
        assert!(extract_json_span("no structured data here", Shape::Object).is_none());
        assert!(extract_json_span("also nothing", Shape::Array).is_none());
    }

    #[test]
    fn test_unbalanced_reply_falls_back_to_widest_span() {
        // Never closes; the widest slice is handed to the parser, which rejects it
        let raw = "{\"broken\": { \"oops\"}";
        let span = extract_json_span(raw, Shape::Object).unwrap();
        assert!(span.starts_with('{'));
        assert!(serde_json::from_str::<Value>(span).is_err());
    }

    #[test]
    fn test_normalize_success_stamps_timestamp() {
        let raw = r#"{"title": "App", "description": "Does things"}"#;
        let result = normalize(raw, Feature::Idea, json!({"title": "fallback"}));
        assert_eq!(result["title"], "App");
        assert!(result["createdAt"].is_string());
    }

    #[test]
    fn test_normalize_failure_returns_fallback_with_timestamp() {
        let fallback = json!({"title": "Fallback Idea"});
        let result = normalize("not json at all", Feature::Idea, fallback);
        assert_eq!(result["title"], "Fallback Idea");
        assert!(result["createdAt"].is_string());
    }

    #[test]
    fn test_judge_validation_requires_all_score_entries() {
        let incomplete = r#"{
            "innovationScore": {"score": 80, "reason": "r", "improvement": "i"},
            "overallWinningProbability": 75
        }"#;
        let fallback = json!({"marker": "fallback"});
        let result = normalize(incomplete, Feature::JudgeScore, fallback);
        assert_eq!(result["marker"], "fallback");
    }

    #[test]
    fn test_judge_validation_rejects_empty_reason() {
        let mut scores = serde_json::Map::new();
        for field in JUDGE_SCORE_FIELDS {
            scores.insert(
                field.to_string(),
                json!({"score": 70, "reason": "", "improvement": "i"}),
            );
        }
        scores.insert("overallWinningProbability".to_string(), json!(70));
        let raw = serde_json::to_string(&scores).unwrap();

        let result = normalize(&raw, Feature::JudgeScore, json!({"marker": "fallback"}));
        assert_eq!(result["marker"], "fallback");
    }

    #[test]
    fn test_judge_validation_accepts_complete_prediction() {
        let mut scores = serde_json::Map::new();
        for field in JUDGE_SCORE_FIELDS {
            scores.insert(
                field.to_string(),
                json!({"score": 82, "reason": "solid", "improvement": "polish"}),
            );
        }
        scores.insert("overallWinningProbability".to_string(), json!(77));
        let raw = serde_json::to_string(&scores).unwrap();

        let result = normalize(&raw, Feature::JudgeScore, json!({"marker": "fallback"}));
        assert!(result.get("marker").is_none());
        assert_eq!(result["overallWinningProbability"], 77);
        assert!(result["timestamp"].is_string());
    }

    #[test]
    fn test_tech_stack_validation_requires_sections() {
        let missing_development = r#"{"techStack": {}, "architecture": {}}"#;
        let result = normalize(
            missing_development,
            Feature::TechStack,
            json!({"marker": "fallback"}),
        );
        assert_eq!(result["marker"], "fallback");
    }

    #[test]
    fn test_roadmap_task_coercion() {
        let raw = r#"{
            "phases": [
                {
                    "phase": "Ideation",
                    "tasks": [
                        "Sketch the problem",
                        {"title": "Define MVP", "description": "Core features only"},
                        {"title": "Assign owners", "completed": true}
                    ]
                }
            ]
        }"#;
        let result = normalize(raw, Feature::Roadmap, json!({}));
        let phase = &result["phases"][0];

        assert_eq!(phase["name"], "Ideation");
        let tasks = phase["tasks"].as_array().unwrap();
        assert_eq!(tasks.len(), 3);

        assert_eq!(tasks[0]["title"], "Sketch the problem");
        assert_eq!(tasks[0]["description"], "");
        assert_eq!(tasks[0]["completed"], false);

        assert_eq!(tasks[1]["title"], "Define MVP");
        assert_eq!(tasks[1]["description"], "Core features only");
        assert_eq!(tasks[1]["completed"], false);

        assert_eq!(tasks[2]["completed"], true);
        assert_eq!(tasks[2]["description"], "");
    }

    #[test]
    fn test_roadmap_phase_without_tasks_gets_empty_list() {
        let raw = r#"{"phases": [{"name": "Design"}]}"#;
        let result = normalize(raw, Feature::Roadmap, json!({}));
        assert_eq!(result["phases"][0]["tasks"], json!([]));
    }

    #[test]
    fn test_topics_normalize_returns_array_unstamped() {
        let raw = r#"[{"title": "Topic A"}]"#;
        let result = normalize(raw, Feature::Topics, json!([]));
        assert!(result.is_array());
        assert_eq!(result[0]["title"], "Topic A");
    }
}
