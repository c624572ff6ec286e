//! Main analysis engine combining category scoring, role identification and keyword extraction

use crate::config::{CategoryWeights, Config, SuggestionConfig};
use crate::error::Result;
use crate::processing::category_scorer::{Category, CategoryScore, CategoryScorer, NEUTRAL_SCORE};
use crate::processing::keywords::KeywordExtractor;
use crate::processing::role_identifier::{JobRole, RoleIdentifier, RoleMatch};
use crate::processing::text_processor::TextNormalizer;
use crate::resources::suggestions::{
    FALLBACK_STRENGTH, FALLBACK_SUGGESTION, GENERAL_SUGGESTIONS, LEADERSHIP_STRENGTH,
    PROJECT_STRENGTH, TEAMWORK_STRENGTH,
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashSet;

/// Categories below this score receive targeted suggestions
const SUGGESTION_THRESHOLD: u8 = 70;
/// Categories at or above this score count as strengths
const STRENGTH_THRESHOLD: u8 = 75;
/// Role confidence needed before the role is reported as a strength
const ROLE_STRENGTH_CONFIDENCE: f64 = 0.5;
const PROFICIENCY_KEYWORDS: usize = 3;
const STRENGTH_KEYWORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u8,
    /// One entry per category, in fixed category order
    pub category_scores: Vec<CategoryScore>,
    pub improvement_suggestions: Vec<String>,
    pub key_strengths: Vec<String>,
    pub job_role: RoleMatch,
    pub keywords: Vec<String>,
}

/// Storage row for one category's feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFeedbackRow {
    pub category: Category,
    pub content: String,
    pub score: u8,
}

impl AnalysisResult {
    /// Fixed payload returned when a full analysis fails
    pub fn degraded() -> Self {
        Self {
            overall_score: NEUTRAL_SCORE,
            category_scores: Category::ALL
                .iter()
                .map(|category| CategoryScore {
                    category: *category,
                    score: NEUTRAL_SCORE,
                    feedback: category.error_feedback(),
                })
                .collect(),
            improvement_suggestions: vec![FALLBACK_SUGGESTION.to_string()],
            key_strengths: vec![FALLBACK_STRENGTH.to_string()],
            job_role: RoleMatch {
                role: JobRole::Unknown,
                confidence: 0.0,
            },
            keywords: Vec::new(),
        }
    }

    pub fn score_for(&self, category: Category) -> Option<&CategoryScore> {
        self.category_scores.iter().find(|s| s.category == category)
    }

    /// Role confidence as an integer percentage
    pub fn role_confidence_percent(&self) -> u8 {
        (self.job_role.confidence * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
    }

    /// JSON feedback document keyed by category wire name plus the summary fields
    pub fn feedback_blob(&self) -> Value {
        let mut blob = Map::new();
        for score in &self.category_scores {
            blob.insert(score.category.as_str().to_string(), Value::String(score.feedback.clone()));
        }
        blob.insert("improvement_suggestions".to_string(), json!(self.improvement_suggestions));
        blob.insert("key_strengths".to_string(), json!(self.key_strengths));
        blob.insert("job_role".to_string(), json!(self.job_role.role.display_name()));
        blob.insert("job_role_confidence".to_string(), json!(self.role_confidence_percent()));
        blob.insert("keywords".to_string(), json!(self.keywords));
        Value::Object(blob)
    }

    pub fn feedback_rows(&self) -> Vec<CategoryFeedbackRow> {
        self.category_scores
            .iter()
            .map(|score| CategoryFeedbackRow {
                category: score.category,
                content: score.feedback.clone(),
                score: score.score,
            })
            .collect()
    }
}

/// Result of [`ResumeAnalyzer::analyze_resume`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Complete(AnalysisResult),
    Degraded { reason: String, result: AnalysisResult },
}

impl AnalysisOutcome {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Complete(result) => result,
            AnalysisOutcome::Degraded { result, .. } => result,
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            AnalysisOutcome::Complete(result) => result,
            AnalysisOutcome::Degraded { result, .. } => result,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, AnalysisOutcome::Degraded { .. })
    }
}

/// Main analysis engine that coordinates all analysis components
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    scorer: CategoryScorer,
    keywords: KeywordExtractor,
    roles: RoleIdentifier,
    category_weights: CategoryWeights,
    suggestions: SuggestionConfig,
    keyword_count: usize,
}

impl ResumeAnalyzer {
    pub fn new(config: &Config) -> Self {
        let normalizer = TextNormalizer::new();
        Self {
            scorer: CategoryScorer::new(normalizer.clone()),
            keywords: KeywordExtractor::new(normalizer.clone()),
            roles: RoleIdentifier::new(normalizer),
            category_weights: config.scoring.category_weights.clone(),
            suggestions: config.suggestions.clone(),
            keyword_count: config.scoring.keyword_count,
        }
    }

    /// Analyze a resume, returning the default payload instead of an error
    pub fn analyze_resume(&self, resume_text: &str) -> AnalysisOutcome {
        match self.analyze(resume_text) {
            Ok(result) => AnalysisOutcome::Complete(result),
            Err(e) => {
                warn!("Resume analysis failed, returning default result: {}", e);
                AnalysisOutcome::Degraded {
                    reason: e.to_string(),
                    result: AnalysisResult::degraded(),
                }
            }
        }
    }

    pub fn analyze(&self, resume_text: &str) -> Result<AnalysisResult> {
        info!("Analyzing resume ({} characters)", resume_text.len());

        let category_scores = self.scorer.score_all(resume_text);
        let overall_score = self.weighted_score(&category_scores);
        let job_role = self.roles.identify_role(resume_text)?;

        let improvement_suggestions = self.improvement_suggestions(&category_scores);
        let key_strengths = self.key_strengths(resume_text, &category_scores, &job_role);
        let keywords = self.keywords.extract_keywords(resume_text, self.keyword_count);

        debug!(
            "Analysis complete: overall {}, role {} ({:.2})",
            overall_score, job_role.role, job_role.confidence
        );

        Ok(AnalysisResult {
            overall_score,
            category_scores,
            improvement_suggestions,
            key_strengths,
            job_role,
            keywords,
        })
    }

    /// Rounded weighted average of the category scores
    pub fn weighted_score(&self, scores: &[CategoryScore]) -> u8 {
        let total: f64 = scores
            .iter()
            .map(|s| s.score as f64 * self.category_weights.weight(s.category))
            .sum();
        total.round_ties_even().clamp(0.0, 100.0) as u8
    }

    pub fn improvement_suggestions(&self, scores: &[CategoryScore]) -> Vec<String> {
        let mut suggestions: Vec<String> = scores
            .iter()
            .filter(|s| s.score < SUGGESTION_THRESHOLD)
            .flat_map(|s| category_suggestions(s.category))
            .map(|s| s.to_string())
            .collect();

        let mut rng = match self.suggestions.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        suggestions.extend(
            GENERAL_SUGGESTIONS
                .choose_multiple(&mut rng, self.suggestions.general_sample_size)
                .map(|s| s.to_string()),
        );

        dedup_limited(suggestions, self.suggestions.max_suggestions)
    }

    pub fn key_strengths(&self, resume_text: &str, scores: &[CategoryScore], role: &RoleMatch) -> Vec<String> {
        let mut strengths = Vec::new();

        for score in scores.iter().filter(|s| s.score >= STRENGTH_THRESHOLD) {
            match score.category {
                Category::TechnicalSkills => {
                    strengths.push("Strong technical skill set".to_string());
                    let top = self.keywords.extract_keywords(resume_text, PROFICIENCY_KEYWORDS);
                    if !top.is_empty() {
                        strengths.push(format!("Proficiency in {}", top.join(", ")));
                    }
                }
                Category::Education => strengths.push("Strong educational background".to_string()),
                Category::Experience => {
                    strengths.push("Solid professional experience".to_string());
                    strengths.push("Clear demonstration of career progression".to_string());
                }
                Category::Achievements => {
                    strengths.push("Impressive achievements with measurable results".to_string())
                }
                Category::Formatting => {
                    strengths.push("Well-organized and professionally formatted resume".to_string())
                }
            }
        }

        if role.confidence > ROLE_STRENGTH_CONFIDENCE {
            strengths.push(format!("Strong alignment with {} positions", role.role));
        }

        let keywords = self.keywords.extract_keywords(resume_text, STRENGTH_KEYWORDS);
        let has = |word: &str| keywords.iter().any(|k| k == word);
        if has("team") || has("collaborate") {
            strengths.push(TEAMWORK_STRENGTH.to_string());
        }
        if has("lead") || has("manage") {
            strengths.push(LEADERSHIP_STRENGTH.to_string());
        }
        if has("project") {
            strengths.push(PROJECT_STRENGTH.to_string());
        }

        dedup_limited(strengths, self.suggestions.max_strengths)
    }
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

fn category_suggestions(category: Category) -> [&'static str; 2] {
    match category {
        Category::TechnicalSkills => [
            "Add more specific technical skills relevant to your target role",
            "Organize skills by proficiency level (e.g., Expert, Proficient, Familiar)",
        ],
        Category::Education => [
            "Include more details about relevant coursework and academic achievements",
            "Add GPA if it's above 3.0",
        ],
        Category::Experience => [
            "Use strong action verbs to begin each bullet point",
            "Quantify achievements with specific metrics and results",
        ],
        Category::Achievements => [
            "Add more measurable achievements with specific metrics",
            "Include awards, certifications, or other recognitions",
        ],
        Category::Formatting => [
            "Improve formatting with consistent spacing and alignment",
            "Use a clean, professional template with clear section headings",
        ],
    }
}

/// Drop repeats keeping first occurrences, then truncate
fn dedup_limited(items: Vec<String>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Senior software engineer with 8 years of experience building web applications. \
        Skills: Python, Java, JavaScript, React, Docker, Kubernetes, AWS, PostgreSQL, Git. \
        Led the team that migrated the platform to microservices; managed three projects. \
        Education: Bachelor of Science in Computer Science, State University, GPA 3.8. \
        Achievements: reduced latency by 40% and received the engineering excellence award.";

    fn scores(values: [u8; 5]) -> Vec<CategoryScore> {
        Category::ALL
            .iter()
            .zip(values)
            .map(|(category, score)| CategoryScore {
                category: *category,
                score,
                feedback: String::new(),
            })
            .collect()
    }

    fn seeded(seed: u64) -> ResumeAnalyzer {
        let mut config = Config::default();
        config.suggestions.seed = Some(seed);
        ResumeAnalyzer::new(&config)
    }

    #[test]
    fn test_weighted_score() {
        let analyzer = ResumeAnalyzer::default();
        assert_eq!(analyzer.weighted_score(&scores([80, 60, 70, 50, 90])), 71);
        assert_eq!(analyzer.weighted_score(&scores([100; 5])), 100);
        assert_eq!(analyzer.weighted_score(&scores([0; 5])), 0);
    }

    #[test]
    fn test_analyze_complete() {
        let analyzer = ResumeAnalyzer::default();
        let outcome = analyzer.analyze_resume(RESUME);

        assert!(!outcome.is_degraded());
        let result = outcome.result();
        assert_eq!(result.category_scores.len(), 5);
        assert!(result.category_scores.iter().all(|s| s.score <= 100));
        assert!(result.overall_score <= 100);
        assert!(!result.keywords.is_empty() && result.keywords.len() <= 20);
        assert!(result.improvement_suggestions.len() <= 10);
        assert!(result.key_strengths.len() <= 5);
        assert!(JobRole::IDENTIFIABLE.contains(&result.job_role.role));
        assert!((0.0..=1.0).contains(&result.job_role.confidence));
    }

    #[test]
    fn test_short_resume_identifies_role() {
        let analyzer = ResumeAnalyzer::default();
        let result = analyzer
            .analyze("I have 5 years experience in Python and led a team")
            .unwrap();

        assert!(JobRole::IDENTIFIABLE.contains(&result.job_role.role));
        assert!((0.0..=1.0).contains(&result.job_role.confidence));
    }

    #[test]
    fn test_empty_resume_degrades() {
        let analyzer = ResumeAnalyzer::default();
        let outcome = analyzer.analyze_resume("");

        match &outcome {
            AnalysisOutcome::Degraded { reason, result } => {
                assert!(!reason.is_empty());
                assert_eq!(result, &AnalysisResult::degraded());
            }
            AnalysisOutcome::Complete(_) => panic!("expected degraded outcome"),
        }

        let result = outcome.into_result();
        assert_eq!(result.overall_score, 50);
        assert_eq!(result.job_role.role, JobRole::Unknown);
        assert_eq!(result.improvement_suggestions, vec!["Ensure your resume is in a standard format"]);
        assert_eq!(
            result.score_for(Category::TechnicalSkills).unwrap().feedback,
            "Unable to analyze technical skills due to an error."
        );
    }

    #[test]
    fn test_low_scores_fill_suggestions_in_category_order() {
        let analyzer = ResumeAnalyzer::default();
        let suggestions = analyzer.improvement_suggestions(&scores([0; 5]));

        assert_eq!(suggestions.len(), 10);
        assert_eq!(suggestions[0], "Add more specific technical skills relevant to your target role");
        assert_eq!(suggestions[9], "Use a clean, professional template with clear section headings");
    }

    #[test]
    fn test_general_suggestions_sampled_without_repeats() {
        let analyzer = ResumeAnalyzer::default();
        let suggestions = analyzer.improvement_suggestions(&scores([100; 5]));

        assert_eq!(suggestions.len(), 5);
        assert!(suggestions.iter().all(|s| GENERAL_SUGGESTIONS.contains(&s.as_str())));
        let unique: HashSet<_> = suggestions.iter().collect();
        assert_eq!(unique.len(), suggestions.len());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let first = seeded(42).improvement_suggestions(&scores([65, 100, 100, 100, 100]));
        let second = seeded(42).improvement_suggestions(&scores([65, 100, 100, 100, 100]));

        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn test_key_strengths_capped() {
        let analyzer = ResumeAnalyzer::default();
        let role = RoleMatch {
            role: JobRole::SoftwareEngineer,
            confidence: 0.9,
        };
        let strengths = analyzer.key_strengths(RESUME, &scores([100; 5]), &role);

        assert_eq!(strengths.len(), 5);
        assert_eq!(strengths[0], "Strong technical skill set");
        assert!(strengths[1].starts_with("Proficiency in "));
    }

    #[test]
    fn test_role_and_keyword_strengths() {
        let analyzer = ResumeAnalyzer::default();
        let role = RoleMatch {
            role: JobRole::ProductManager,
            confidence: 0.6,
        };
        let text = "team project team project lead";
        let strengths = analyzer.key_strengths(text, &scores([0; 5]), &role);

        assert_eq!(
            strengths,
            vec![
                "Strong alignment with Product Manager positions".to_string(),
                TEAMWORK_STRENGTH.to_string(),
                LEADERSHIP_STRENGTH.to_string(),
                PROJECT_STRENGTH.to_string(),
            ]
        );
    }

    #[test]
    fn test_feedback_blob_and_rows() {
        let mut result = AnalysisResult::degraded();
        result.job_role = RoleMatch {
            role: JobRole::DataScientist,
            confidence: 0.436,
        };

        let blob = result.feedback_blob();
        assert_eq!(blob["education"], "Unable to analyze education due to an error.");
        assert_eq!(blob["job_role"], "Data Scientist");
        assert_eq!(blob["job_role_confidence"], 44);
        assert_eq!(blob["keywords"], json!([]));

        let rows = result.feedback_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2].category, Category::Experience);
        assert_eq!(rows[2].score, 50);
    }

    #[test]
    fn test_dedup_limited_keeps_first_occurrence() {
        let items = ["b", "a", "b", "c", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(dedup_limited(items, 2), vec!["b", "a"]);
    }
}
