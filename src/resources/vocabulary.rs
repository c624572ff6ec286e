//! Skill vocabularies used for job description matching.
//!
//! Entries are compared against single normalized tokens, so phrases and
//! entries containing punctuation ("machine learning", "c++", "ci/cd") never
//! match. They stay listed as published.

pub const TECHNICAL_SKILLS: &[&str] = &[
    "programming", "coding", "software", "development", "engineering",
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go",
    "react", "angular", "vue", "node", "django", "flask", "spring",
    "database", "sql", "mysql", "postgresql", "mongodb", "nosql",
    "aws", "azure", "cloud", "docker", "kubernetes", "devops",
    "git", "github", "gitlab", "ci/cd", "jenkins", "testing",
];

pub const SOFT_SKILLS: &[&str] = &[
    "communication", "teamwork", "leadership", "problem-solving",
    "critical thinking", "time management", "organization", "adaptability",
    "creativity", "collaboration", "interpersonal", "presentation",
    "negotiation", "conflict resolution", "decision making", "flexibility",
];

pub const DOMAIN_SKILLS: &[&str] = &[
    "finance", "healthcare", "education", "retail", "manufacturing",
    "marketing", "sales", "customer service", "human resources", "operations",
    "project management", "product management", "data analysis", "research",
    "consulting", "legal", "compliance", "security", "quality assurance",
];
