//! Content-category scoring against fixed reference documents

use crate::processing::keywords::KeywordExtractor;
use crate::processing::text_processor::TextNormalizer;
use crate::processing::tfidf::TermWeighting;
use crate::resources::corpus;
use crate::resources::suggestions::NO_FEEDBACK_AVAILABLE;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score used whenever a comparison has no indexable terms
pub const NEUTRAL_SCORE: u8 = 50;

/// Number of resume keywords quoted in category feedback
const FEEDBACK_KEYWORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TechnicalSkills,
    Education,
    Experience,
    Achievements,
    Formatting,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::TechnicalSkills,
        Category::Education,
        Category::Experience,
        Category::Achievements,
        Category::Formatting,
    ];

    /// Wire name used in feedback blobs and storage rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TechnicalSkills => "technical_skills",
            Category::Education => "education",
            Category::Experience => "experience",
            Category::Achievements => "achievements",
            Category::Formatting => "formatting",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }

    /// Human label, e.g. "technical skills"
    pub fn label(&self) -> &'static str {
        match self {
            Category::TechnicalSkills => "technical skills",
            Category::Education => "education",
            Category::Experience => "experience",
            Category::Achievements => "achievements",
            Category::Formatting => "formatting",
        }
    }

    pub fn reference_document(&self) -> &'static str {
        match self {
            Category::TechnicalSkills => corpus::TECHNICAL_SKILLS_REFERENCE,
            Category::Education => corpus::EDUCATION_REFERENCE,
            Category::Experience => corpus::EXPERIENCE_REFERENCE,
            Category::Achievements => corpus::ACHIEVEMENTS_REFERENCE,
            Category::Formatting => corpus::FORMATTING_REFERENCE,
        }
    }

    /// Feedback used when the category could not be scored
    pub fn error_feedback(&self) -> String {
        format!("Unable to analyze {} due to an error.", self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u8,
    pub feedback: String,
}

/// Convert a similarity in [0, 1] to a clamped integer percentage.
/// Halves round to even.
pub fn similarity_to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone)]
pub struct CategoryScorer {
    normalizer: TextNormalizer,
    weighting: TermWeighting,
    keywords: KeywordExtractor,
}

impl CategoryScorer {
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self {
            keywords: KeywordExtractor::new(normalizer.clone()),
            weighting: TermWeighting::new(),
            normalizer,
        }
    }

    /// Score `resume_text` against one category's reference document
    pub fn score_category(&self, resume_text: &str, category: Category) -> CategoryScore {
        let resume = self.normalizer.normalize(resume_text).as_document();
        let reference = self.normalizer.normalize(category.reference_document()).as_document();

        match self.weighting.similarity(&resume, &reference) {
            Ok(similarity) => {
                let score = similarity_to_score(similarity);
                debug!("Category {} scored {} (similarity {:.4})", category, score, similarity);

                let keywords = self.keywords.extract_keywords(resume_text, FEEDBACK_KEYWORDS);
                CategoryScore {
                    category,
                    score,
                    feedback: category_feedback(category, score, &keywords),
                }
            }
            Err(e) => {
                warn!("Category {} fell back to neutral score: {}", category, e);
                CategoryScore {
                    category,
                    score: NEUTRAL_SCORE,
                    feedback: category.error_feedback(),
                }
            }
        }
    }

    pub fn score_all(&self, resume_text: &str) -> Vec<CategoryScore> {
        Category::ALL
            .iter()
            .map(|category| self.score_category(resume_text, *category))
            .collect()
    }
}

impl Default for CategoryScorer {
    fn default() -> Self {
        Self::new(TextNormalizer::new())
    }
}

/// Feedback for a category given by wire name; unknown names get a generic text
pub fn feedback_for_name(name: &str, score: u8, keywords: &[String]) -> String {
    match Category::from_name(name) {
        Some(category) => category_feedback(category, score, keywords),
        None => NO_FEEDBACK_AVAILABLE.to_string(),
    }
}

/// Three-tier feedback ladder (>= 80, >= 60, below) quoting the top keywords
pub fn category_feedback(category: Category, score: u8, keywords: &[String]) -> String {
    let keywords_str = keywords
        .iter()
        .take(FEEDBACK_KEYWORDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    match category {
        Category::TechnicalSkills => {
            if score >= 80 {
                format!("Your technical skills section is strong, with good emphasis on {}. Consider organizing them by proficiency level. Add more details about your expertise in specific technologies. Consider adding relevant certifications to strengthen this section.", keywords_str)
            } else if score >= 60 {
                format!("Your technical skills section is adequate, highlighting {}. However, you should add more in-demand technologies and frameworks. Group skills by categories (e.g., programming languages, frameworks, tools) and indicate proficiency levels.", keywords_str)
            } else {
                format!("Your technical skills section needs significant improvement. While you mention {}, you should add more specific technologies and frameworks relevant to your target roles. Include programming languages, frameworks, tools, and platforms with proficiency levels.", keywords_str)
            }
        }
        Category::Education => {
            if score >= 80 {
                format!("Education section is well-structured, highlighting {}. Include GPA if it's above 3.5. Consider adding relevant coursework that aligns with your target positions. Highlight any academic achievements or leadership roles.", keywords_str)
            } else if score >= 60 {
                format!("Your education section is adequate, mentioning {}. Add more details about relevant coursework, academic projects, and achievements. Include GPA if it's strong, and highlight any scholarships or honors.", keywords_str)
            } else {
                format!("Your education section needs improvement. While you mention {}, you should provide more structure and details. Include degree names, institutions, graduation dates, GPA (if above 3.0), relevant coursework, and academic achievements.", keywords_str)
            }
        }
        Category::Experience => {
            if score >= 80 {
                format!("Your work experience is impressive, highlighting {}. Use more action verbs and quantify your achievements with metrics. For example, 'Increased website performance by 40%' instead of 'Improved website performance'. Focus on outcomes rather than just responsibilities.", keywords_str)
            } else if score >= 60 {
                format!("Your experience section is adequate, mentioning {}. However, you should use stronger action verbs to begin each bullet point and quantify your achievements where possible. Focus more on what you accomplished rather than just listing responsibilities.", keywords_str)
            } else {
                format!("Your experience section needs significant improvement. While you mention {}, your descriptions lack impact. Use the STAR method (Situation, Task, Action, Result) to structure your bullet points. Begin with strong action verbs and quantify achievements with specific metrics.", keywords_str)
            }
        }
        Category::Achievements => {
            if score >= 80 {
                format!("Good list of achievements, mentioning {}, but they could be more impactful. Quantify results where possible and connect them to business outcomes. Consider adding awards, recognitions, or publications if applicable.", keywords_str)
            } else if score >= 60 {
                format!("Your achievements section is present but needs enhancement. While you mention {}, try to quantify your accomplishments with specific metrics and highlight the impact on the organization. Add any awards, certifications, or recognitions.", keywords_str)
            } else {
                "Your achievements section is weak or missing. Add specific accomplishments from your career or education, quantified with metrics where possible. Include awards, recognitions, certifications, and other notable achievements that demonstrate your value.".to_string()
            }
        }
        Category::Formatting => {
            if score >= 80 {
                format!("The resume layout is clean, with good use of {}, but consider using a more modern template. Ensure consistent spacing and alignment throughout. Use bullet points for better readability and keep bullet points to 1-2 lines each.", keywords_str)
            } else if score >= 60 {
                format!("Your resume formatting is adequate but could be improved. While you use {}, ensure consistent fonts, spacing, and alignment throughout. Use bullet points instead of paragraphs for experience and achievements. Consider a cleaner, more modern template.", keywords_str)
            } else {
                "Your resume formatting needs significant improvement. Create a clean, professional layout with consistent fonts, spacing, and alignment. Use clear section headings, bullet points for readability, and ensure the document is ATS-friendly. Limit to 1-2 pages maximum.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Senior software engineer with 8 years experience. \
        Skills: Python, Java, React, Docker, Kubernetes, AWS, PostgreSQL. \
        Led a team of five developers and managed client projects. \
        Bachelor degree in Computer Science from State University.";

    #[test]
    fn test_scores_in_range() {
        let scorer = CategoryScorer::default();
        let scores = scorer.score_all(RESUME);

        assert_eq!(scores.len(), 5);
        for (score, category) in scores.iter().zip(Category::ALL) {
            assert_eq!(score.category, category);
            assert!(score.score <= 100);
            assert!(!score.feedback.is_empty());
        }
    }

    #[test]
    fn test_technical_resume_beats_unrelated_text() {
        let scorer = CategoryScorer::default();
        let technical = scorer.score_category(RESUME, Category::TechnicalSkills);
        let unrelated = scorer.score_category("Gardening poetry and watercolor painting", Category::TechnicalSkills);

        assert!(technical.score > unrelated.score);
        assert_eq!(unrelated.score, 0);
    }

    #[test]
    fn test_empty_resume_gets_neutral_score() {
        let scorer = CategoryScorer::default();
        let score = scorer.score_category("", Category::Education);

        assert_eq!(score.score, NEUTRAL_SCORE);
        assert_eq!(score.feedback, "Unable to analyze education due to an error.");
    }

    #[test]
    fn test_feedback_tiers_quote_keywords() {
        let keywords: Vec<String> = ["python", "react", "docker", "aws", "sql", "extra"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let strong = category_feedback(Category::TechnicalSkills, 85, &keywords);
        assert!(strong.starts_with("Your technical skills section is strong"));
        assert!(strong.contains("python, react, docker, aws, sql."));
        assert!(!strong.contains("extra"));

        let adequate = category_feedback(Category::Education, 60, &keywords);
        assert!(adequate.starts_with("Your education section is adequate"));

        let weak = category_feedback(Category::Experience, 59, &keywords);
        assert!(weak.starts_with("Your experience section needs significant improvement"));
    }

    #[test]
    fn test_unknown_category_name() {
        assert_eq!(feedback_for_name("hobbies", 90, &[]), NO_FEEDBACK_AVAILABLE);
        assert!(feedback_for_name("formatting", 90, &[]).starts_with("The resume layout is clean"));
    }

    #[test]
    fn test_similarity_to_score() {
        assert_eq!(similarity_to_score(0.0), 0);
        assert_eq!(similarity_to_score(0.444), 44);
        assert_eq!(similarity_to_score(0.456), 46);
        assert_eq!(similarity_to_score(1.7), 100);
        assert_eq!(similarity_to_score(1.0), 100);
        // below a half by less than single precision can represent
        assert_eq!(similarity_to_score(0.134_999_999_9), 13);
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_name("unknown"), None);
    }
}
