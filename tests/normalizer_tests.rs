// Integration tests for the response normalizer's contract:
// every call returns a payload satisfying the feature's shape, with only the
// timestamp varying between identical inputs.

use ideabot_lib::ai::fallback;
use ideabot_lib::ai::normalize::{normalize, Feature};
use ideabot_lib::models::TeamProfile;
use serde_json::{json, Value};

/// Strip the generated timestamp so payloads can be compared structurally
fn without_timestamp(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        obj.remove("createdAt");
        obj.remove("timestamp");
    }
    value
}

#[test]
fn test_fallback_idempotent_modulo_timestamp() {
    let garbage = "The model produced prose instead of JSON. Sorry!";

    let first = normalize(garbage, Feature::JudgeScore, fallback::judge_fallback());
    let second = normalize(garbage, Feature::JudgeScore, fallback::judge_fallback());

    assert!(first["timestamp"].is_string());
    assert_eq!(without_timestamp(first), without_timestamp(second));
}

#[test]
fn test_round_trip_adds_only_timestamp() {
    let payload = json!({
        "title": "FarmWatch",
        "description": "Monitor crops with drones",
        "techStack": ["Rust", "Axum"],
        "difficulty": "Advanced"
    });
    let raw = format!("Here you go:\n{}\nHope that helps!", payload);

    let result = normalize(&raw, Feature::Idea, fallback::idea_fallback("Agri", &raw));

    assert!(result["createdAt"].is_string());
    assert_eq!(without_timestamp(result), payload);
}

#[test]
fn test_every_feature_returns_well_shaped_payload_for_garbage_input() {
    let garbage = "```\nnot json\n```";

    let idea = normalize(garbage, Feature::Idea, fallback::idea_fallback("X", garbage));
    assert!(idea["title"].is_string());
    assert!(idea["createdAt"].is_string());

    let topics = normalize(
        garbage,
        Feature::Topics,
        fallback::topics_fallback(&TeamProfile::default()),
    );
    assert!(!topics.as_array().unwrap().is_empty());
    assert!(topics[0]["title"].is_string());

    let roadmap = normalize(garbage, Feature::Roadmap, fallback::roadmap_fallback(None));
    assert_eq!(roadmap["phases"].as_array().unwrap().len(), 5);
    assert!(roadmap["createdAt"].is_string());

    let judge = normalize(garbage, Feature::JudgeScore, fallback::judge_fallback());
    for field in [
        "innovationScore",
        "feasibilityScore",
        "technicalDepthScore",
        "impactScore",
        "presentationScore",
    ] {
        assert!(judge[field]["score"].is_number(), "{} missing", field);
    }
    assert_eq!(judge["overallWinningProbability"], 70);

    let tech = normalize(garbage, Feature::TechStack, fallback::tech_stack_fallback());
    assert!(tech["techStack"].is_object());
    assert!(tech["architecture"].is_object());
    assert!(tech["development"].is_object());
    assert!(tech["timestamp"].is_string());
}

#[test]
fn test_roadmap_mixed_task_list_normalizes_uniformly() {
    let raw = r#"{
        "phases": [
            {
                "name": "Development",
                "tasks": [
                    "Wire up the API",
                    {"title": "Build UI", "description": "Screens and routing"},
                    {"title": "Ship it", "completed": true}
                ]
            }
        ]
    }"#;

    let result = normalize(raw, Feature::Roadmap, fallback::roadmap_fallback(None));
    let tasks = result["phases"][0]["tasks"].as_array().unwrap();

    for task in tasks {
        assert!(task["title"].is_string());
        assert!(task["description"].is_string());
        assert!(task["completed"].is_boolean());
    }
    assert_eq!(
        tasks[0],
        json!({"title": "Wire up the API", "description": "", "completed": false})
    );
    assert_eq!(tasks[1]["completed"], false);
    assert_eq!(tasks[2]["completed"], true);
}

#[test]
fn test_partial_judge_reply_never_reaches_caller() {
    // A parseable object that misses the required score entries must be
    // replaced wholesale, not passed through half-filled
    let partial = r#"{"innovationScore": {"score": 90, "reason": "great", "improvement": "none"}}"#;

    let result = normalize(partial, Feature::JudgeScore, fallback::judge_fallback());

    assert_eq!(result["overallWinningProbability"], 70);
    assert_eq!(result["innovationScore"]["score"], 70);
}

#[test]
fn test_first_balanced_object_wins_over_later_fragments() {
    let raw = r#"Example shape: {"title": "Example"}. Full answer: {"title": "Real", "extra": 1}"#;

    let result = normalize(raw, Feature::Idea, fallback::idea_fallback("X", raw));

    // The first balanced span is taken; the documented alternative of picking
    // the largest span would return "Real" here
    assert_eq!(result["title"], "Example");
}
