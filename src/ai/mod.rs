//! AI request/response pipeline
//!
//! Each feature follows the same three steps: build a prompt from the
//! caller's fields, invoke the OpenRouter gateway once, and normalize the
//! reply into the feature's fixed JSON shape (falling back to a static
//! payload when the reply cannot be parsed). Nothing is cached or retried;
//! every call is an independent round trip.

pub mod client;
pub mod context;
pub mod fallback;
pub mod normalize;
pub mod prompts;

mod error;

pub use client::OpenRouterClient;
pub use error::AiError;

use crate::models::{ChatMessage, TeamProfile};
use normalize::Feature;
use serde_json::{json, Value};

/// Generate a hackathon project idea for a domain, optionally steered by a
/// free-text context string ("Skills: ..., Tech Stack: ..., Size: 4")
pub async fn generate_idea(
    client: &OpenRouterClient,
    domain: &str,
    user_context: Option<&str>,
) -> Result<Value, AiError> {
    let context_text = user_context.unwrap_or("").trim();
    let profile = context::parse_context(context_text);
    generate_idea_with_profile(client, domain, context_text, &profile).await
}

/// Generate an idea with an already-resolved profile. Callers that received
/// structured fields use this directly and skip the free-text shim.
pub async fn generate_idea_with_profile(
    client: &OpenRouterClient,
    domain: &str,
    context_text: &str,
    profile: &context::ContextProfile,
) -> Result<Value, AiError> {
    let prompt = prompts::idea_prompt(domain, context_text, profile);

    let reply = client.invoke(&[ChatMessage::user(prompt)], true).await?;

    let fallback = fallback::idea_fallback(domain, &reply.content);
    let mut idea = normalize::normalize(&reply.content, Feature::Idea, fallback);
    // The requested domain rides along unless the model already set one
    if let Some(obj) = idea.as_object_mut() {
        if !obj.contains_key("domain") {
            obj.insert("domain".to_string(), json!(domain));
        }
    }
    Ok(idea)
}

/// Suggest five project topics for a team profile
pub async fn suggest_topics(
    client: &OpenRouterClient,
    profile: &TeamProfile,
) -> Result<Value, AiError> {
    let prompt = prompts::topics_prompt(profile);
    let reply = client.invoke(&[ChatMessage::user(prompt)], true).await?;

    let fallback = fallback::topics_fallback(profile);
    Ok(normalize::normalize(&reply.content, Feature::Topics, fallback))
}

/// Generate a 5-phase roadmap for a project idea.
///
/// The idea may be a plain string or an object carrying `title`,
/// `description`, and `techStack`.
pub async fn generate_roadmap(
    client: &OpenRouterClient,
    project_idea: &Value,
    team: Option<&TeamProfile>,
) -> Result<Value, AiError> {
    let (title, description) = describe_project(project_idea);
    let team_size = team.and_then(|t| t.effective_size()).unwrap_or(3);
    let experience = team
        .and_then(|t| t.experience.as_deref())
        .filter(|e| !e.is_empty())
        .unwrap_or("Intermediate");

    let prompt = prompts::roadmap_prompt(&title, &description, team_size, experience);
    let reply = client.invoke(&[ChatMessage::user(prompt)], true).await?;

    let fallback = fallback::roadmap_fallback(project_idea.get("techStack"));
    Ok(normalize::normalize(&reply.content, Feature::Roadmap, fallback))
}

/// Predict judge scores for a project
pub async fn predict_judge_score(
    client: &OpenRouterClient,
    idea: &str,
    roadmap: &str,
    tech_stack: &str,
    team_size: Option<u32>,
) -> Result<Value, AiError> {
    let prompt = prompts::judge_prompt(idea, roadmap, tech_stack, team_size);
    let reply = client.invoke(&[ChatMessage::user(prompt)], true).await?;

    Ok(normalize::normalize(
        &reply.content,
        Feature::JudgeScore,
        fallback::judge_fallback(),
    ))
}

/// Suggest a tech stack and architecture for a project
pub async fn suggest_tech_stack(
    client: &OpenRouterClient,
    idea: &str,
    domain: &str,
    preferred_languages: &str,
    roadmap: &str,
) -> Result<Value, AiError> {
    let prompt = prompts::tech_stack_prompt(idea, domain, preferred_languages, roadmap);
    let reply = client.invoke(&[ChatMessage::user(prompt)], true).await?;

    Ok(normalize::normalize(
        &reply.content,
        Feature::TechStack,
        fallback::tech_stack_fallback(),
    ))
}

/// Title and description of a project idea that may be a string or an object
fn describe_project(project_idea: &Value) -> (String, String) {
    let title = match project_idea {
        Value::String(s) => s.clone(),
        _ => project_idea["title"]
            .as_str()
            .map(|t| t.to_string())
            .unwrap_or_else(|| project_idea.to_string()),
    };
    let description = project_idea["description"]
        .as_str()
        .filter(|d| !d.is_empty())
        .unwrap_or("Build this project")
        .to_string();
    (title, description)
}
