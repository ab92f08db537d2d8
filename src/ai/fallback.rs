// Static fallback payloads returned when a model reply cannot be parsed
//
// Each function authors the complete response shape for its feature. The
// normalizer stamps the timestamp; nothing here is dated.

use crate::models::TeamProfile;
use serde_json::{json, Value};

/// Fallback idea: a structured wrapper around the raw model reply so the
/// caller still sees whatever text came back
pub fn idea_fallback(domain: &str, raw_reply: &str) -> Value {
    json!({
        "domain": domain,
        "title": format!("{} Innovation Project", domain),
        "description": raw_reply,
        "targetAudience": "General users",
        "impact": "Positive social impact",
        "techStack": ["Modern web technologies"],
        "difficulty": "Intermediate",
        "estimatedTime": "24-48 hours",
    })
}

/// Fallback topic list built from whatever profile fields are available
pub fn topics_fallback(profile: &TeamProfile) -> Value {
    let difficulty = profile
        .experience
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or("Intermediate");
    let required_skills = match &profile.skills {
        Some(skills) if !skills.is_empty() => json!(skills),
        _ => json!(["Programming"]),
    };

    json!([
        {
            "title": "AI-Powered Solution",
            "description": "Build something with AI based on your team interests",
            "difficulty": difficulty,
            "requiredSkills": required_skills,
        }
    ])
}

/// Fallback 5-phase roadmap; the tech stack echoes the project idea's when
/// one was supplied
pub fn roadmap_fallback(idea_tech_stack: Option<&Value>) -> Value {
    let tech_stack = match idea_tech_stack {
        Some(stack) if stack.is_array() => stack.clone(),
        _ => json!(["React", "Node.js", "MongoDB"]),
    };

    json!({
        "phases": [
            {
                "name": "Ideation",
                "duration": "2-3 hours",
                "description": "Define problem and solution",
                "tasks": [
                    { "title": "Research the problem", "description": "Understand user needs and pain points", "completed": false },
                    { "title": "Define core features", "description": "List must-have features for MVP", "completed": false },
                    { "title": "Create wireframes", "description": "Sketch basic UI layout", "completed": false }
                ],
                "deliverables": ["Problem statement", "Feature list"],
            },
            {
                "name": "Design",
                "duration": "3-4 hours",
                "description": "Design UI/UX and architecture",
                "tasks": [
                    { "title": "Create mockups", "description": "Design visual interface in Figma/Adobe XD", "completed": false },
                    { "title": "Design database schema", "description": "Plan data models and relationships", "completed": false },
                    { "title": "Plan API endpoints", "description": "Define backend routes and data flow", "completed": false }
                ],
                "deliverables": ["UI mockups", "Architecture diagram"],
            },
            {
                "name": "Development",
                "duration": "12-16 hours",
                "description": "Build the application",
                "tasks": [
                    { "title": "Set up project structure", "description": "Initialize frontend and backend", "completed": false },
                    { "title": "Implement core features", "description": "Build main functionality", "completed": false },
                    { "title": "Integrate components", "description": "Connect frontend with backend", "completed": false }
                ],
                "deliverables": ["Working prototype"],
            },
            {
                "name": "Testing",
                "duration": "2-3 hours",
                "description": "Test and fix bugs",
                "tasks": [
                    { "title": "Test all features", "description": "Check functionality across different scenarios", "completed": false },
                    { "title": "Fix critical bugs", "description": "Address any issues found during testing", "completed": false },
                    { "title": "Optimize performance", "description": "Improve load times and responsiveness", "completed": false }
                ],
                "deliverables": ["Tested application"],
            },
            {
                "name": "Deployment & Presentation",
                "duration": "2-3 hours",
                "description": "Deploy and present",
                "tasks": [
                    { "title": "Deploy application", "description": "Host on Vercel/Netlify/Heroku", "completed": false },
                    { "title": "Prepare presentation", "description": "Create slides and demo script", "completed": false },
                    { "title": "Create demo video", "description": "Record walkthrough of key features", "completed": false }
                ],
                "deliverables": ["Live application", "Presentation", "Demo video"],
            },
        ],
        "totalEstimate": "24-30 hours",
        "recommendations": [
            "Start with MVP features only",
            "Test early and often",
            "Keep the demo simple and impactful",
            "Practice your pitch before presenting"
        ],
        "resources": ["Documentation", "Stack Overflow", "GitHub", "Team collaboration tools"],
        "techStack": tech_stack,
    })
}

/// Fallback judge prediction: moderate scores with generic but actionable
/// feedback, overall winning probability 70
pub fn judge_fallback() -> Value {
    json!({
        "innovationScore": {
            "score": 70,
            "reason": "The idea shows moderate innovation. It addresses a real problem but may benefit from more unique approaches.",
            "improvement": "Consider adding a unique twist or combining technologies in an unexpected way to stand out."
        },
        "feasibilityScore": {
            "score": 75,
            "reason": "The project scope seems achievable within hackathon timeframe with proper planning and task delegation.",
            "improvement": "Break down features into must-haves and nice-to-haves. Focus on core MVP first."
        },
        "technicalDepthScore": {
            "score": 65,
            "reason": "Shows good technical foundation but could demonstrate more sophisticated implementations.",
            "improvement": "Consider integrating advanced features like AI, real-time processing, or complex algorithms."
        },
        "impactScore": {
            "score": 72,
            "reason": "Has potential for positive impact but scalability and reach could be expanded.",
            "improvement": "Quantify the impact with specific metrics and expand target audience reach."
        },
        "presentationScore": {
            "score": 68,
            "reason": "The concept is clear but would benefit from better articulation of the problem and solution.",
            "improvement": "Create a compelling narrative with clear problem statement, solution, and demo flow."
        },
        "overallWinningProbability": 70,
        "overallReview": "This project shows promise with a solid foundation and clear purpose. To increase winning chances, focus on making your innovation stand out, ensure flawless execution within the time limit, and prepare an engaging presentation that clearly demonstrates impact. The technical implementation should showcase depth while remaining achievable.",
        "keyRecommendations": [
            "Add a unique innovation factor that makes judges say \"I haven't seen this before\"",
            "Create a working demo that clearly shows the problem and solution in action",
            "Quantify your impact with specific numbers and real-world use cases",
            "Practice your pitch to ensure clarity and confidence during presentation",
            "Document your code well and prepare for technical questions from judges"
        ],
        "nextBestImprovement": {
            "criterion": "Innovation",
            "currentScore": 70,
            "potentialScore": 85,
            "action": "Add a unique feature like AI-powered personalization or real-time collaborative capabilities that competitors typically don't implement. This would differentiate your project significantly.",
            "expectedImpact": "Would increase overall winning probability from 70% to 78%"
        },
        "competitorComparison": {
            "typicalCompetitorScore": 65,
            "yourAdvantages": [
                "Clear problem-solution fit with practical applicability",
                "Feasible scope that can be completed within hackathon timeframe",
                "Solid technical foundation with room for enhancement"
            ],
            "competitorAdvantages": [
                "May have more innovative or cutting-edge features",
                "Could present more polished demos or presentations",
                "Might have stronger quantifiable impact metrics"
            ],
            "standoutFactor": "Your project is above average but needs a distinctive \"wow factor\" to break into the top 10%."
        },
        "ideaChanges": {
            "quickWins": [
                "Add real-time notifications or live updates to make the demo more engaging",
                "Include data visualization or analytics dashboard to showcase impact",
                "Implement user authentication and personalization for more professional feel"
            ],
            "pivotSuggestions": [
                "Innovation: Integrate AI/ML capabilities for predictive features or personalized recommendations",
                "Impact: Expand scope to serve multiple user segments or solve a broader problem",
                "Technical Depth: Add microservices architecture or cloud deployment with auto-scaling"
            ],
            "featureAdditions": [
                "AI-powered recommendation engine: Would demonstrate technical sophistication and improve user experience",
                "Real-time collaboration features: Shows advanced technical skills and increases practical utility",
                "Mobile-responsive PWA or native app: Expands accessibility and shows full-stack capabilities"
            ]
        },
    })
}

/// Fallback tech stack recommendation: a proven hackathon-friendly web stack
pub fn tech_stack_fallback() -> Value {
    json!({
        "techStack": {
            "frontend": ["React", "TailwindCSS", "Vite"],
            "frontendReason": "React offers fast development with reusable components, TailwindCSS for rapid styling, and Vite for quick build times.",
            "backend": ["Node.js", "Express.js"],
            "backendReason": "Node.js and Express provide a lightweight, fast backend perfect for hackathon MVP development.",
            "database": ["MongoDB"],
            "databaseReason": "MongoDB's flexible schema is ideal for rapid prototyping and iterating during a hackathon.",
            "aiModels": ["OpenAI GPT-4"],
            "aiReason": "GPT-4 provides powerful AI capabilities with simple API integration for intelligent features.",
            "cloudServices": ["Vercel", "MongoDB Atlas"],
            "cloudReason": "Vercel offers free hosting with excellent performance, MongoDB Atlas provides free database tier."
        },
        "apiRecommendations": [
            {
                "name": "OpenAI API",
                "purpose": "AI-powered features and natural language processing",
                "type": "AI/ML",
                "pricing": "Pay-per-use, free trial available"
            },
            {
                "name": "Auth0",
                "purpose": "User authentication and authorization",
                "type": "Authentication",
                "pricing": "Free tier for up to 7,000 users"
            },
            {
                "name": "SendGrid",
                "purpose": "Email notifications and communication",
                "type": "Communication",
                "pricing": "Free tier: 100 emails/day"
            }
        ],
        "architecture": {
            "overview": "A modern JAMstack architecture with React frontend, serverless backend functions, and cloud database. This setup enables rapid development and easy deployment.",
            "pattern": "JAMstack",
            "patternReason": "JAMstack is perfect for hackathons - fast development, easy deployment, and excellent performance with minimal infrastructure management.",
            "dataFlow": [
                "User interacts with React frontend",
                "Frontend makes API calls to Express backend",
                "Backend processes requests and queries MongoDB",
                "AI features call OpenAI API when needed",
                "Response data flows back to frontend for display"
            ],
            "externalServices": [
                "OpenAI API: Integrated in backend for AI-powered features",
                "MongoDB Atlas: Cloud database for data persistence",
                "Vercel: Frontend hosting with automatic deployments"
            ],
            "realTimeCommunication": "Can add Socket.io if real-time features are needed, but not required for basic MVP.",
            "aiIntegration": "AI is integrated through backend API routes that call OpenAI services. Frontend sends user input to backend, which processes it with AI and returns intelligent responses."
        },
        "folderStructure": "project-root/\n├── frontend/\n│   ├── src/\n│   │   ├── components/\n│   │   ├── pages/\n│   │   ├── services/\n│   │   │   └── api.js\n│   │   ├── App.js\n│   │   └── index.js\n│   ├── public/\n│   └── package.json\n├── backend/\n│   ├── controllers/\n│   ├── models/\n│   ├── routes/\n│   ├── services/\n│   │   └── openai.js\n│   ├── config/\n│   ├── server.js\n│   └── package.json\n├── .env\n└── README.md",
        "development": {
            "libraries": [
                "Frontend: npm install react react-dom react-router-dom",
                "Frontend: npm install axios tailwindcss",
                "Backend: npm install express cors dotenv",
                "Backend: npm install mongoose openai",
                "Dev Tools: npm install nodemon concurrently"
            ],
            "whyThisStack": "This stack is optimized for hackathons: React and TailwindCSS enable rapid UI development, Node.js/Express provides a familiar backend, MongoDB allows flexible data modeling, and all components have excellent documentation and community support. The entire stack can be learned quickly if needed.",
            "scalability": "This architecture can easily scale post-hackathon. The modular design allows adding microservices, the database can scale with MongoDB Atlas, and Vercel handles frontend scaling automatically. Can migrate to containerized deployment with Docker/Kubernetes later.",
            "estimatedTime": "24-36 hours for 3-person team: 4h setup & planning, 16h core development, 6h testing & polish, 2h deployment & documentation",
            "setupSteps": [
                "Initialize frontend: npx create-vite@latest frontend --template react",
                "Initialize backend: npm init and install dependencies",
                "Set up MongoDB Atlas account and get connection string",
                "Create .env file with API keys (OpenAI, MongoDB)",
                "Start development: run frontend (npm run dev) and backend (npm start) concurrently"
            ]
        },
        "recommendations": [
            "Start with a minimal MVP and add features incrementally",
            "Use environment variables for all API keys and secrets",
            "Implement proper error handling for API calls",
            "Test core functionality early and often",
            "Prepare a demo script to showcase features effectively",
            "Document setup steps in README for judges"
        ],
    })
}
