// Best-effort extraction of profile fields from free-text context
//
// Older clients pack tech stack, skills, experience, and team size into one
// "context" string ("Skills: Python, Tech Stack: React, Experience:
// Advanced, Size: 4"). This shim recovers those fields with regexes and
// silently defaults when a pattern does not match. New callers should send
// structured fields instead; nothing outside this module depends on the
// string format.

use regex::Regex;
use std::sync::OnceLock;

const DEFAULT_EXPERIENCE: &str = "Intermediate";
const DEFAULT_TEAM_SIZE: u32 = 3;

/// Profile fields recovered from a free-text context string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextProfile {
    pub tech_stack: Option<String>,
    pub skills: Option<String>,
    pub experience: String,
    pub team_size: u32,
}

impl Default for ContextProfile {
    fn default() -> Self {
        Self {
            tech_stack: None,
            skills: None,
            experience: DEFAULT_EXPERIENCE.to_string(),
            team_size: DEFAULT_TEAM_SIZE,
        }
    }
}

static TECH_STACK_RE: OnceLock<Regex> = OnceLock::new();
static SKILLS_RE: OnceLock<Regex> = OnceLock::new();
static EXPERIENCE_RE: OnceLock<Regex> = OnceLock::new();
static TEAM_SIZE_RE: OnceLock<Regex> = OnceLock::new();

fn tech_stack_re() -> &'static Regex {
    TECH_STACK_RE.get_or_init(|| {
        Regex::new(r"(?i)Tech Stack:\s*([^,]+(?:,[^,]+)*?)(?:,\s*Experience:|$)").unwrap()
    })
}

fn skills_re() -> &'static Regex {
    SKILLS_RE.get_or_init(|| {
        Regex::new(r"(?i)Skills:\s*([^,]+(?:,[^,]+)*?)(?:,\s*Tech Stack:|$)").unwrap()
    })
}

fn experience_re() -> &'static Regex {
    EXPERIENCE_RE.get_or_init(|| Regex::new(r"(?i)Experience:\s*(\w+)").unwrap())
}

fn team_size_re() -> &'static Regex {
    TEAM_SIZE_RE.get_or_init(|| Regex::new(r"(?i)Size:\s*(\d+)").unwrap())
}

fn capture_text(re: &Regex, context: &str) -> Option<String> {
    re.captures(context)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse a free-text context string into a profile, defaulting any field
/// whose pattern does not match
pub fn parse_context(context: &str) -> ContextProfile {
    let experience = capture_text(experience_re(), context)
        .unwrap_or_else(|| DEFAULT_EXPERIENCE.to_string());

    let team_size = team_size_re()
        .captures(context)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(DEFAULT_TEAM_SIZE);

    ContextProfile {
        tech_stack: capture_text(tech_stack_re(), context),
        skills: capture_text(skills_re(), context),
        experience,
        team_size,
    }
}
