//! Configuration management for the resume scorer

use crate::error::{Result, ResumeScorerError};
use crate::processing::category_scorer::Category;
use crate::processing::skills::SkillCategory;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub suggestions: SuggestionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub category_weights: CategoryWeights,
    pub skill_weights: SkillWeights,
    /// Share of the weighted skill score in the job match score
    pub skill_score_weight: f64,
    /// Share of the whole-document similarity in the job match score
    pub similarity_weight: f64,
    pub keyword_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub technical_skills: f64,
    pub education: f64,
    pub experience: f64,
    pub achievements: f64,
    pub formatting: f64,
}

impl CategoryWeights {
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::TechnicalSkills => self.technical_skills,
            Category::Education => self.education,
            Category::Experience => self.experience,
            Category::Achievements => self.achievements,
            Category::Formatting => self.formatting,
        }
    }

    fn sum(&self) -> f64 {
        Category::ALL.iter().map(|c| self.weight(*c)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillWeights {
    pub technical: f64,
    pub soft: f64,
    pub domain: f64,
}

impl SkillWeights {
    pub fn weight(&self, category: SkillCategory) -> f64 {
        match category {
            SkillCategory::Technical => self.technical,
            SkillCategory::Soft => self.soft,
            SkillCategory::Domain => self.domain,
        }
    }

    fn sum(&self) -> f64 {
        SkillCategory::ALL.iter().map(|c| self.weight(*c)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Fixed seed for general-suggestion sampling; `None` draws from the thread RNG
    pub seed: Option<u64>,
    pub general_sample_size: usize,
    pub max_suggestions: usize,
    pub max_strengths: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            suggestions: SuggestionConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            category_weights: CategoryWeights {
                technical_skills: 0.3,
                education: 0.2,
                experience: 0.3,
                achievements: 0.1,
                formatting: 0.1,
            },
            skill_weights: SkillWeights {
                technical: 0.6,
                soft: 0.2,
                domain: 0.2,
            },
            skill_score_weight: 0.7,
            similarity_weight: 0.3,
            keyword_count: 20,
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            general_sample_size: 5,
            max_suggestions: 10,
            max_strengths: 5,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-scorer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;

        check_sum("category weights", scoring.category_weights.sum())?;
        check_sum("skill weights", scoring.skill_weights.sum())?;
        check_sum(
            "match weights",
            scoring.skill_score_weight + scoring.similarity_weight,
        )?;

        if scoring.keyword_count == 0 {
            return Err(ResumeScorerError::Configuration(
                "keyword_count must be greater than zero".to_string(),
            ));
        }
        if self.suggestions.max_suggestions == 0 || self.suggestions.max_strengths == 0 {
            return Err(ResumeScorerError::Configuration(
                "suggestion and strength limits must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

fn check_sum(name: &str, sum: f64) -> Result<()> {
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ResumeScorerError::Configuration(format!(
            "{} must sum to 1.0, got {}",
            name, sum
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.category_weights.weight(Category::Experience), 0.3);
        assert_eq!(config.scoring.skill_weights.weight(SkillCategory::Technical), 0.6);
        assert_eq!(config.suggestions.max_suggestions, 10);
    }

    #[test]
    fn test_rejects_bad_weights() {
        let mut config = Config::default();
        config.scoring.category_weights.formatting = 0.5;
        assert!(matches!(config.validate(), Err(ResumeScorerError::Configuration(_))));

        let mut config = Config::default();
        config.scoring.similarity_weight = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.suggestions.max_strengths = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.suggestions.seed = Some(7);
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scoring = 3").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ResumeScorerError::Configuration(_))));
    }
}
