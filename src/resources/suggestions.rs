//! Fixed suggestion and strength texts

/// General improvement suggestions sampled into every analysis
pub const GENERAL_SUGGESTIONS: &[&str] = &[
    "Add measurable achievements with specific metrics",
    "Include relevant keywords for ATS optimization",
    "Organize skills by proficiency level",
    "Use strong action verbs to begin bullet points",
    "Ensure consistent formatting throughout",
    "Quantify achievements with numbers and percentages",
    "Tailor your resume to the specific job description",
    "Remove outdated or irrelevant experience",
    "Add a concise professional summary",
    "Include relevant certifications and training",
    "Optimize your LinkedIn profile and add the URL",
    "Use industry-specific terminology",
    "Focus on accomplishments rather than responsibilities",
    "Eliminate personal pronouns (I, me, my)",
    "Keep resume to 1-2 pages maximum",
    "Use a clean, professional design",
    "Proofread for grammar and spelling errors",
    "Include relevant projects with measurable outcomes",
    "Add technical skills section with proficiency levels",
    "Use reverse chronological order for experience",
];

pub const FALLBACK_SUGGESTION: &str = "Ensure your resume is in a standard format";
pub const FALLBACK_STRENGTH: &str = "Unable to identify key strengths due to an error";
pub const NO_FEEDBACK_AVAILABLE: &str = "No specific feedback available for this category.";

pub const TEAMWORK_STRENGTH: &str = "Good teamwork and collaboration skills";
pub const LEADERSHIP_STRENGTH: &str = "Leadership experience";
pub const PROJECT_STRENGTH: &str = "Project management experience";
