//! Skill categorization against the fixed technical/soft/domain vocabularies

use crate::processing::text_processor::TextNormalizer;
use crate::resources::vocabulary::{DOMAIN_SKILLS, SOFT_SKILLS, TECHNICAL_SKILLS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Domain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Domain => "domain",
        }
    }

    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::Technical => TECHNICAL_SKILLS,
            SkillCategory::Soft => SOFT_SKILLS,
            SkillCategory::Domain => DOMAIN_SKILLS,
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Skills found in one text, per category, in first-seen order without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedSkills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub domain: Vec<String>,
}

impl CategorizedSkills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Domain => &self.domain,
        }
    }

    fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Domain => &mut self.domain,
        }
    }

    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len() + self.domain.len()
    }
}

/// Matches normalized tokens against the skill vocabularies.
///
/// Only single-token entries can ever match: normalization splits phrases and
/// strips punctuation before comparison.
#[derive(Debug, Clone)]
pub struct SkillCategorizer {
    normalizer: TextNormalizer,
    vocabularies: Vec<(SkillCategory, HashSet<&'static str>)>,
}

impl SkillCategorizer {
    pub fn new(normalizer: TextNormalizer) -> Self {
        let vocabularies = SkillCategory::ALL
            .iter()
            .map(|category| (*category, category.vocabulary().iter().copied().collect()))
            .collect();

        Self {
            normalizer,
            vocabularies,
        }
    }

    pub fn extract_skills(&self, text: &str) -> CategorizedSkills {
        let normalized = self.normalizer.normalize(text);
        let mut skills = CategorizedSkills::default();

        for token in normalized.tokens() {
            for (category, vocabulary) in &self.vocabularies {
                if vocabulary.contains(token.as_str()) {
                    let matched = skills.get_mut(*category);
                    if !matched.contains(token) {
                        matched.push(token.clone());
                    }
                }
            }
        }

        skills
    }

    pub fn vocabulary_size(&self, category: SkillCategory) -> usize {
        self.vocabularies
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, vocabulary)| vocabulary.len())
    }
}

impl Default for SkillCategorizer {
    fn default() -> Self {
        Self::new(TextNormalizer::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skills() {
        let categorizer = SkillCategorizer::default();
        let text = "Python and Docker developer with strong communication, leadership and finance background. Python again.";

        let skills = categorizer.extract_skills(text);

        assert_eq!(skills.technical, vec!["python", "docker"]);
        assert_eq!(skills.soft, vec!["communication", "leadership"]);
        assert_eq!(skills.domain, vec!["finance"]);
    }

    #[test]
    fn test_phrases_do_not_match() {
        let categorizer = SkillCategorizer::default();
        let skills = categorizer.extract_skills("Machine learning, C++, CI/CD, critical thinking, customer service");

        assert!(skills.technical.is_empty());
        assert!(skills.soft.is_empty());
        assert!(skills.domain.is_empty());
    }

    #[test]
    fn test_led_is_not_leadership() {
        let categorizer = SkillCategorizer::default();
        let skills = categorizer.extract_skills("I have 5 years experience in Python and led a team");

        assert_eq!(skills.technical, vec!["python"]);
        assert!(skills.soft.is_empty());
    }

    #[test]
    fn test_devops_matches() {
        let categorizer = SkillCategorizer::default();
        assert_eq!(categorizer.extract_skills("devops").technical, vec!["devops"]);
        assert_eq!(categorizer.extract_skills("DevOps and Jenkins").technical, vec!["devops", "jenkins"]);

        let normalized = TextNormalizer::new().normalize("DevOps devops");
        assert_eq!(normalized.tokens(), ["devops", "devops"]);
    }

    #[test]
    fn test_inflected_vocabulary_entry_misses() {
        // "sales" lemmatizes to "sale", which is not in the vocabulary
        let categorizer = SkillCategorizer::default();
        let skills = categorizer.extract_skills("Sales and operations");
        assert!(skills.domain.is_empty());
    }

    #[test]
    fn test_vocabulary_sizes() {
        let categorizer = SkillCategorizer::default();
        assert_eq!(categorizer.vocabulary_size(SkillCategory::Technical), 38);
        assert_eq!(categorizer.vocabulary_size(SkillCategory::Soft), 16);
        assert_eq!(categorizer.vocabulary_size(SkillCategory::Domain), 19);
    }
}
