// Prompt templates for each AI feature
//
// Pure functions assembling the instruction string sent to the model,
// including a strict description of the JSON shape the reply must use.
// Optional clauses are omitted entirely when their input is absent so the
// model never sees empty placeholders.

use super::context::ContextProfile;
use crate::models::TeamProfile;

/// Prompt for generating a single hackathon project idea
pub fn idea_prompt(domain: &str, user_context: &str, profile: &ContextProfile) -> String {
    let tech_stack = profile.tech_stack.as_deref().unwrap_or("");
    let skills = profile.skills.as_deref().unwrap_or("");
    let experience = &profile.experience;
    let team_size = profile.team_size;

    let tech_stack_instruction = if !tech_stack.is_empty() {
        format!(
            "\nIMPORTANT: The user's tech stack is: {tech_stack}\n\
             You MUST build the idea around these technologies. The \"techStack\" field should primarily use these technologies: {tech_stack}.\n\
             You can add 1-2 complementary technologies if absolutely necessary, but the core stack MUST be: {tech_stack}"
        )
    } else {
        String::new()
    };

    let skills_instruction = if !skills.is_empty() {
        format!("\nUser's skills: {skills}\nEnsure the idea leverages these skills.")
    } else {
        String::new()
    };

    let context_line = if !user_context.is_empty() {
        format!("User context: {user_context}")
    } else {
        String::new()
    };

    let tech_stack_json = if !tech_stack.is_empty() {
        let quoted: Vec<String> = tech_stack
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        format!("[\"{}\"]", quoted.join("\", \""))
    } else {
        r#"["Technology 1", "Technology 2", "Technology 3"]"#.to_string()
    };

    let team_descriptor = if team_size == 1 {
        "a solo".to_string()
    } else {
        format!("{team_size}-person team")
    };

    let stack_focus = if !tech_stack.is_empty() {
        tech_stack.to_string()
    } else {
        "any modern technologies".to_string()
    };

    let ambition_focus = match experience.as_str() {
        "Advanced" => "Complex, ambitious ideas that push boundaries",
        "Beginner" => "Achievable yet innovative ideas with clear milestones",
        _ => "Moderately challenging innovative ideas that balance ambition with feasibility",
    };

    let stack_reminder = if !tech_stack.is_empty() {
        format!(
            "CRITICAL: Your response MUST use the technologies from this tech stack: {tech_stack}. Do not suggest different technologies."
        )
    } else {
        String::new()
    };

    format!(
        r#"You are an expert hackathon mentor and cutting-edge technology advisor. Generate a highly innovative, advanced hackathon project idea for the "{domain}" domain.

CRITICAL: Before generating the idea, THINK DEEPLY about:
- Team size: {team_size} members
- Skill level: {experience}
- Tech stack: {stack_or_flexible}
- Hackathon duration: 24-48 hours
- Domain/theme: {domain}
- What would make judges say "WOW!"

{context_line}
{tech_stack_instruction}
{skills_instruction}

Provide a response in the following JSON format:
{{
  "title": "Project Title",
  "problemStatement": {{
    "problem": "What problem exists and why it matters",
    "impact": "Scale and significance of the impact",
    "existingSolutions": "Why existing solutions fail or are inadequate",
    "statistics": "Relevant stats or examples that highlight the problem's urgency"
  }},
  "description": "Detailed description highlighting technical innovation and complexity (3-4 sentences)",
  "targetAudience": "Who will benefit from this",
  "whyThisCanWin": [
    "Uniqueness: Why this stands out from typical hackathon projects",
    "Innovation: What cutting-edge approach or technology makes this special",
    "Real-world demand: Market need and practical applications",
    "Judges' appeal: Why judges will be impressed (technical depth, impact, presentation potential)",
    "Feasibility: Why this is achievable in {team_descriptor} within 24-48 hours",
    "Scalability: Post-hackathon potential and growth opportunities",
    "X-factor: The unique element that could make this a winning project"
  ],
  "impact": "Expected impact and benefits - be specific about scale and significance",
  "techStack": {tech_stack_json} (use the user's tech stack),
  "difficulty": "{experience}",
  "estimatedTime": "Realistic time breakdown for {team_size}-person team (e.g., '24 hours: 6hrs planning, 14hrs dev, 4hrs polish')",
  "innovationFactor": "What makes this idea cutting-edge and unique",
  "winningProbability": "High/Medium - brief justification based on innovation, feasibility, and impact"
}}

{stack_reminder}

Focus on:
- Using the user's specified tech stack ({stack_focus})
- {ambition_focus}
- Ideas that solve REAL problems with measurable impact
- Projects that can realistically be built by a {team_size}-person team in a hackathon
- Technical sophistication appropriate for {experience} level
- Elements that make judges excited: innovation + impact + execution

Make it technically sophisticated, intellectually challenging, and highly innovative while respecting the user's technology choices and team constraints."#,
        domain = domain,
        team_size = team_size,
        experience = experience,
        stack_or_flexible = if tech_stack.is_empty() { "flexible" } else { tech_stack },
        context_line = context_line,
        tech_stack_instruction = tech_stack_instruction,
        skills_instruction = skills_instruction,
        team_descriptor = team_descriptor,
        tech_stack_json = tech_stack_json,
        stack_reminder = stack_reminder,
        stack_focus = stack_focus,
        ambition_focus = ambition_focus,
    )
}

/// Prompt for suggesting project topics from a team profile
pub fn topics_prompt(profile: &TeamProfile) -> String {
    let team_size = profile.effective_size().unwrap_or(3);
    let skills = profile
        .skills
        .as_ref()
        .map(|s| s.join(", "))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Not specified".to_string());
    let experience = profile
        .experience
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or("Not specified");
    let interests = profile
        .interests
        .as_deref()
        .filter(|i| !i.is_empty())
        .unwrap_or("Not specified");

    format!(
        r#"You are a hackathon coach. Based on this team profile, suggest 5 specific project topics they should consider:

Team Size: {team_size} members
Skills: {skills}
Experience Level: {experience}
Interests: {interests}

Provide 5 specific project topics as a JSON array:
[
  {{
    "title": "Topic Title",
    "description": "Why this topic suits the team (1-2 sentences)",
    "difficulty": "Beginner/Intermediate/Advanced",
    "requiredSkills": ["Skill 1", "Skill 2"]
  }}
]

Make suggestions realistic for their skill level and interests."#
    )
}

/// Prompt for generating a 5-phase project roadmap
pub fn roadmap_prompt(title: &str, description: &str, team_size: u32, experience: &str) -> String {
    format!(
        r#"You are a hackathon project manager. Create a detailed 5-phase roadmap for this project:

Project: {title}
Description: {description}
Team Size: {team_size} members
Experience: {experience}

Create a roadmap with 5 phases (Ideation, Design, Development, Testing, Deployment).
Provide response as JSON with this EXACT structure:
{{
  "phases": [
    {{
      "name": "Phase Name",
      "duration": "Time estimate",
      "description": "What to do in this phase",
      "tasks": [
        {{"title": "Task name", "description": "Task details", "completed": false}}
      ],
      "deliverables": ["Deliverable 1", "Deliverable 2"]
    }}
  ],
  "totalEstimate": "Overall time estimate",
  "recommendations": ["Tip 1", "Tip 2", "Tip 3"],
  "resources": ["Resource 1", "Resource 2"],
  "techStack": ["Tech 1", "Tech 2", "Tech 3"]
}}

Be realistic for a hackathon timeline (24-48 hours). Each phase should have 3-4 tasks with title and description."#
    )
}

/// Prompt for predicting judge scores for a project
pub fn judge_prompt(
    idea: &str,
    roadmap: &str,
    tech_stack: &str,
    team_size: Option<u32>,
) -> String {
    let roadmap_line = if !roadmap.is_empty() {
        format!("Roadmap: {roadmap}")
    } else {
        String::new()
    };
    let tech_stack_line = if !tech_stack.is_empty() {
        format!("Tech Stack: {tech_stack}")
    } else {
        String::new()
    };
    let team_size_line = match team_size {
        Some(size) => format!("Team Size: {size} members"),
        None => String::new(),
    };

    format!(
        r#"You are an experienced hackathon judge evaluating projects. Analyze this hackathon project and provide detailed scoring predictions.

PROJECT DETAILS:
Idea: {idea}

{roadmap_line}

{tech_stack_line}

{team_size_line}

As a judge, evaluate this project on 5 key criteria and provide scores from 0-100:

1. INNOVATION SCORE (0-100):
   - Novelty of the idea
   - Creativity in approach
   - Originality compared to existing solutions

2. FEASIBILITY SCORE (0-100):
   - Can it be built in 24-72 hours?
   - Resource requirements
   - Technical difficulty vs team capability

3. TECHNICAL DEPTH SCORE (0-100):
   - Architecture complexity
   - Use of advanced technologies (ML/APIs/Cloud)
   - Code quality expectations

4. IMPACT SCORE (0-100):
   - Real-world usefulness
   - Social or business value
   - Scalability potential

5. PRESENTATION SCORE (0-100):
   - Clarity of problem/solution
   - Pitch potential
   - Demo-friendliness

Provide your evaluation in this EXACT JSON format:
{{
  "innovationScore": {{
    "score": 85,
    "reason": "Why you gave this score (2-3 sentences)",
    "improvement": "Specific actionable advice to improve this score"
  }},
  "feasibilityScore": {{
    "score": 75,
    "reason": "Why you gave this score (2-3 sentences)",
    "improvement": "Specific actionable advice to improve this score"
  }},
  "technicalDepthScore": {{
    "score": 70,
    "reason": "Why you gave this score (2-3 sentences)",
    "improvement": "Specific actionable advice to improve this score"
  }},
  "impactScore": {{
    "score": 80,
    "reason": "Why you gave this score (2-3 sentences)",
    "improvement": "Specific actionable advice to improve this score"
  }},
  "presentationScore": {{
    "score": 65,
    "reason": "Why you gave this score (2-3 sentences)",
    "improvement": "Specific actionable advice to improve this score"
  }},
  "overallWinningProbability": 75,
  "overallReview": "A comprehensive 3-4 sentence review from a judge's perspective, highlighting strengths and areas for improvement",
  "keyRecommendations": [
    "Top recommendation to increase winning chances",
    "Second most important recommendation",
    "Third recommendation",
    "Fourth recommendation",
    "Fifth recommendation"
  ],
  "nextBestImprovement": {{
    "criterion": "Name of the criterion that would have the biggest impact if improved (Innovation/Feasibility/Technical Depth/Impact/Presentation)",
    "currentScore": 70,
    "potentialScore": 85,
    "action": "Specific detailed action to take to improve this score (2-3 sentences)",
    "expectedImpact": "How this would affect the overall winning probability (e.g., 'Would increase overall winning probability from 75% to 82%')"
  }},
  "competitorComparison": {{
    "typicalCompetitorScore": 65,
    "yourAdvantages": [
      "Specific advantage 1 over typical competitors",
      "Specific advantage 2 over typical competitors",
      "Specific advantage 3 over typical competitors"
    ],
    "competitorAdvantages": [
      "What typical competitors might do better",
      "Another area where competitors might excel",
      "Third competitive weakness to address"
    ],
    "standoutFactor": "What makes this project stand out from 80% of hackathon submissions (1-2 sentences)"
  }},
  "ideaChanges": {{
    "quickWins": [
      "Small change that would significantly boost scores (takes < 2 hours)",
      "Another quick improvement with high ROI",
      "Third rapid enhancement"
    ],
    "pivotSuggestions": [
      "Major change to raise Innovation score: Specific suggestion with explanation",
      "Major change to raise Impact score: Specific suggestion with explanation",
      "Major change to raise Technical Depth: Specific suggestion with explanation"
    ],
    "featureAdditions": [
      "New feature to add that would impress judges: Description and why it matters",
      "Second feature addition with strong judge appeal",
      "Third feature that increases winning potential"
    ]
  }}
}}

Be honest, constructive, and specific. Consider:
- What judges look for in winning projects
- Balance between ambition and feasibility
- Technical sophistication vs time constraints
- Real-world applicability and impact
- Presentation and demo quality
- How this compares to typical hackathon submissions
- What single change would have the biggest impact

The overallWinningProbability should be a weighted average considering:
- Innovation: 25%
- Feasibility: 20%
- Technical Depth: 20%
- Impact: 25%
- Presentation: 10%

For nextBestImprovement, identify the ONE criterion where improvement would have the maximum impact on winning probability.

For competitorComparison, compare against typical hackathon projects in the same domain/category.

For ideaChanges, provide concrete, specific suggestions that could realistically improve scores."#
    )
}

/// Prompt for suggesting a tech stack and architecture for a project
pub fn tech_stack_prompt(
    idea: &str,
    domain: &str,
    preferred_languages: &str,
    roadmap: &str,
) -> String {
    let preferred_line = if !preferred_languages.is_empty() {
        format!("Preferred Technologies: {preferred_languages}")
    } else {
        String::new()
    };
    let roadmap_line = if !roadmap.is_empty() {
        format!("Roadmap: {roadmap}")
    } else {
        String::new()
    };
    let priority_guideline = if !preferred_languages.is_empty() {
        format!("- PRIORITIZE the user's preferred technologies: {preferred_languages}")
    } else {
        "- Suggest modern, hackathon-friendly technologies".to_string()
    };

    let domain_considerations = match domain {
        "Healthcare" => "- HIPAA compliance, secure data handling, health data APIs",
        "Finance" => "- Payment APIs, transaction security, financial data APIs",
        "Education" => "- Learning management features, progress tracking, educational APIs",
        "E-commerce" => "- Payment processing, inventory management, shipping APIs",
        "Social Impact" => "- Accessibility, scalability, community features",
        "Agriculture" => "- IoT integration, weather APIs, sensor data processing",
        "Environment" => "- Data visualization, monitoring APIs, sustainability metrics",
        _ => "",
    };

    format!(
        r#"You are an expert software architect and hackathon mentor. Analyze this project and provide comprehensive tech stack and architecture recommendations.

PROJECT DETAILS:
Idea: {idea}
Domain: {domain}
{preferred_line}
{roadmap_line}

Provide a COMPLETE technical recommendation in this EXACT JSON format:

{{
  "techStack": {{
    "frontend": ["React", "TailwindCSS", "Vite"],
    "frontendReason": "Why these frontend technologies are ideal for this project",
    "backend": ["Node.js", "Express.js"],
    "backendReason": "Why this backend stack fits the requirements",
    "database": ["MongoDB"],
    "databaseReason": "Why this database is the best choice",
    "aiModels": ["GPT-4", "Embeddings API"],
    "aiReason": "How AI enhances this project",
    "cloudServices": ["Vercel", "Railway"],
    "cloudReason": "Why these deployment platforms are recommended"
  }},
  "apiRecommendations": [
    {{
      "name": "OpenAI API",
      "purpose": "Natural language processing and generation",
      "type": "AI/ML",
      "pricing": "Free tier available"
    }},
    {{
      "name": "Stripe",
      "purpose": "Payment processing",
      "type": "Payments",
      "pricing": "Pay per transaction"
    }}
  ],
  "architecture": {{
    "overview": "High-level description of the system architecture (2-3 sentences)",
    "pattern": "Monolithic / Microservices / Serverless / JAMstack",
    "patternReason": "Why this architecture pattern is best for this hackathon project",
    "dataFlow": [
      "Step 1: User interaction flow",
      "Step 2: Backend processing",
      "Step 3: Data storage",
      "Step 4: Response delivery"
    ],
    "externalServices": [
      "Service 1: Purpose and integration point",
      "Service 2: Purpose and integration point"
    ],
    "realTimeCommunication": "WebSockets via Socket.io for real-time features / Not required for this project",
    "aiIntegration": "Detailed explanation of where and how AI is integrated into the architecture"
  }},
  "folderStructure": "project-root/\n├── frontend/\n│   ├── src/\n│   │   ├── components/\n│   │   ├── pages/\n│   │   ├── services/\n│   │   └── utils/\n│   ├── public/\n│   └── package.json\n├── backend/\n│   ├── controllers/\n│   ├── models/\n│   ├── routes/\n│   ├── services/\n│   └── server.js\n└── README.md",
  "development": {{
    "libraries": [
      "npm install react react-dom",
      "npm install express cors",
      "npm install mongoose",
      "npm install openai",
      "npm install socket.io"
    ],
    "whyThisStack": "Comprehensive explanation of why this entire stack is optimal for the project (3-4 sentences)",
    "scalability": "How this architecture can scale post-hackathon (2-3 sentences)",
    "estimatedTime": "24-48 hours with 3-person team - breakdown: 6h setup, 16h core dev, 4h testing",
    "setupSteps": [
      "Clone repository and install dependencies",
      "Set up environment variables for API keys",
      "Initialize database and seed data",
      "Start development servers",
      "Configure deployment pipelines"
    ]
  }},
  "recommendations": [
    "Use TypeScript for better type safety in larger projects",
    "Implement CI/CD pipeline with GitHub Actions",
    "Add monitoring with Sentry or LogRocket",
    "Use Docker for consistent development environments",
    "Implement proper error handling and logging"
  ]
}}

IMPORTANT GUIDELINES:
{priority_guideline}
- Choose technologies that can be learned/implemented quickly
- Recommend tools with good documentation and community support
- Suggest free tier or open-source solutions when possible
- Focus on technologies that judges recognize and respect
- Balance innovation with practicality for hackathon timeline
- Include domain-specific APIs for {domain}
- Recommend 5-8 relevant APIs/tools based on the project needs
- Provide realistic time estimates for hackathon context (24-72 hours)
- Architecture should be buildable within hackathon constraints
- Folder structure should be clear and professional

Domain-specific considerations for {domain}:
{domain_considerations}

Be specific, practical, and actionable. Every recommendation should have a clear reason."#
    )
}
