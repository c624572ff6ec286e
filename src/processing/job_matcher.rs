//! Resume to job description matching

use crate::config::{ScoringConfig, SkillWeights};
use crate::processing::category_scorer::{similarity_to_score, NEUTRAL_SCORE};
use crate::processing::skills::{SkillCategorizer, SkillCategory};
use crate::processing::text_processor::TextNormalizer;
use crate::processing::tfidf::TermWeighting;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Technical skills named in the first missing-skills suggestion
const TECHNICAL_SUGGESTION_LIMIT: usize = 5;
/// Upper bound (exclusive) of the overflow technical suggestion
const TECHNICAL_OVERFLOW_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatchResult {
    pub overall_match_score: u8,
    pub similarity_score: u8,
    pub skill_match_scores: BTreeMap<SkillCategory, u8>,
    /// Job skills absent from the resume, in job description order
    pub missing_skills: BTreeMap<SkillCategory, Vec<String>>,
    pub matched_skills: BTreeMap<SkillCategory, BTreeSet<String>>,
}

#[derive(Debug, Clone)]
pub struct JobMatcher {
    normalizer: TextNormalizer,
    weighting: TermWeighting,
    categorizer: SkillCategorizer,
    skill_weights: SkillWeights,
    skill_score_weight: f64,
    similarity_weight: f64,
}

impl JobMatcher {
    pub fn new(normalizer: TextNormalizer, scoring: &ScoringConfig) -> Self {
        Self {
            categorizer: SkillCategorizer::new(normalizer.clone()),
            weighting: TermWeighting::new(),
            normalizer,
            skill_weights: scoring.skill_weights.clone(),
            skill_score_weight: scoring.skill_score_weight,
            similarity_weight: scoring.similarity_weight,
        }
    }

    /// Compare a resume with a job description
    pub fn calculate_match_score(&self, resume_text: &str, job_description: &str) -> JobMatchResult {
        let resume = self.normalizer.normalize(resume_text).as_document();
        let job = self.normalizer.normalize(job_description).as_document();

        let similarity = match self.weighting.similarity(&resume, &job) {
            Ok(similarity) => similarity,
            Err(e) => {
                warn!("Document similarity fell back to neutral score: {}", e);
                f64::from(NEUTRAL_SCORE) / 100.0
            }
        };

        let resume_skills = self.categorizer.extract_skills(resume_text);
        let job_skills = self.categorizer.extract_skills(job_description);

        let mut ratios: BTreeMap<SkillCategory, f64> = BTreeMap::new();
        let mut missing_skills = BTreeMap::new();
        let mut matched_skills = BTreeMap::new();

        for category in SkillCategory::ALL {
            let resume_set: BTreeSet<&String> = resume_skills.get(category).iter().collect();
            let job_list = job_skills.get(category);

            let matched: BTreeSet<String> = job_list
                .iter()
                .filter(|skill| resume_set.contains(skill))
                .cloned()
                .collect();

            // no required skills in a category means full credit for it
            let ratio = if job_list.is_empty() {
                100.0
            } else {
                matched.len() as f64 / job_list.len() as f64 * 100.0
            };

            let missing: Vec<String> = job_list
                .iter()
                .filter(|skill| !resume_set.contains(skill))
                .cloned()
                .collect();

            ratios.insert(category, ratio);
            missing_skills.insert(category, missing);
            matched_skills.insert(category, matched);
        }

        let weighted_skill_score: f64 = ratios
            .iter()
            .map(|(category, ratio)| ratio * self.skill_weights.weight(*category))
            .sum();

        let final_score = self.skill_score_weight * weighted_skill_score
            + self.similarity_weight * similarity * 100.0;
        let overall_match_score = final_score.round_ties_even().clamp(0.0, 100.0) as u8;

        debug!(
            "Job match: weighted skills {:.2}, similarity {:.4}, overall {}",
            weighted_skill_score, similarity, overall_match_score
        );

        JobMatchResult {
            overall_match_score,
            similarity_score: similarity_to_score(similarity),
            skill_match_scores: ratios
                .into_iter()
                .map(|(category, ratio)| (category, ratio.round_ties_even().clamp(0.0, 100.0) as u8))
                .collect(),
            missing_skills,
            matched_skills,
        }
    }

    /// Suggestions naming missing skills, then two tiered general suggestions
    pub fn generate_improvement_suggestions(&self, result: &JobMatchResult) -> Vec<String> {
        let mut suggestions = Vec::new();

        for (category, skills) in &result.missing_skills {
            if skills.is_empty() {
                continue;
            }

            match category {
                SkillCategory::Technical => {
                    let first = &skills[..skills.len().min(TECHNICAL_SUGGESTION_LIMIT)];
                    suggestions.push(format!(
                        "Add these technical skills to your resume: {}",
                        first.join(", ")
                    ));

                    if skills.len() > TECHNICAL_SUGGESTION_LIMIT {
                        let overflow = &skills
                            [TECHNICAL_SUGGESTION_LIMIT..skills.len().min(TECHNICAL_OVERFLOW_LIMIT)];
                        suggestions.push(format!(
                            "Consider learning these additional technical skills: {}",
                            overflow.join(", ")
                        ));
                    }
                }
                SkillCategory::Soft => suggestions.push(format!(
                    "Highlight these soft skills in your resume: {}",
                    skills.join(", ")
                )),
                SkillCategory::Domain => suggestions.push(format!(
                    "Add domain knowledge in: {}",
                    skills.join(", ")
                )),
            }
        }

        let tier: [&str; 2] = if result.overall_match_score < 50 {
            [
                "Your resume needs significant tailoring for this job description",
                "Consider a complete resume rewrite focusing on the required skills",
            ]
        } else if result.overall_match_score < 70 {
            [
                "Tailor your resume more specifically to this job description",
                "Reorganize your skills section to highlight relevant experience",
            ]
        } else {
            [
                "Your resume is well-matched to this job description",
                "Consider emphasizing your most relevant achievements more prominently",
            ]
        };
        suggestions.extend(tier.iter().map(|s| s.to_string()));

        suggestions
    }
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new(TextNormalizer::new(), &ScoringConfig::default())
    }
}
