//! Job-role identification against fixed role reference documents

use crate::error::{Result, ResumeScorerError};
use crate::processing::text_processor::TextNormalizer;
use crate::processing::tfidf::TermWeighting;
use crate::resources::corpus;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobRole {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    Marketing,
    Finance,
    /// Only produced by the degraded analysis payload
    Unknown,
}

impl JobRole {
    /// Identifiable roles in table order; earlier entries win ties
    pub const IDENTIFIABLE: [JobRole; 5] = [
        JobRole::SoftwareEngineer,
        JobRole::DataScientist,
        JobRole::ProductManager,
        JobRole::Marketing,
        JobRole::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobRole::SoftwareEngineer => "software_engineer",
            JobRole::DataScientist => "data_scientist",
            JobRole::ProductManager => "product_manager",
            JobRole::Marketing => "marketing",
            JobRole::Finance => "finance",
            JobRole::Unknown => "unknown",
        }
    }

    /// Title-cased display name, e.g. "Software Engineer"
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn reference_document(&self) -> Option<&'static str> {
        match self {
            JobRole::SoftwareEngineer => Some(corpus::SOFTWARE_ENGINEER_REFERENCE),
            JobRole::DataScientist => Some(corpus::DATA_SCIENTIST_REFERENCE),
            JobRole::ProductManager => Some(corpus::PRODUCT_MANAGER_REFERENCE),
            JobRole::Marketing => Some(corpus::MARKETING_REFERENCE),
            JobRole::Finance => Some(corpus::FINANCE_REFERENCE),
            JobRole::Unknown => None,
        }
    }
}

impl fmt::Display for JobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role: JobRole,
    /// Cosine similarity with the role's reference document, in [0, 1]
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct RoleIdentifier {
    normalizer: TextNormalizer,
    weighting: TermWeighting,
}

impl RoleIdentifier {
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self {
            normalizer,
            weighting: TermWeighting::new(),
        }
    }

    /// Best-matching role for a resume.
    ///
    /// Fails with [`ResumeScorerError::EmptyDocument`] when the resume has no
    /// indexable terms, since every role would then be a tie at zero.
    pub fn identify_role(&self, resume_text: &str) -> Result<RoleMatch> {
        let resume = self.normalizer.normalize(resume_text).as_document();
        if self.weighting.analyze(&resume).is_empty() {
            return Err(ResumeScorerError::EmptyDocument(
                "resume has no indexable terms for role identification".to_string(),
            ));
        }

        let mut best = RoleMatch {
            role: JobRole::IDENTIFIABLE[0],
            confidence: f64::MIN,
        };

        for role in JobRole::IDENTIFIABLE {
            let Some(reference) = role.reference_document() else {
                continue;
            };
            let reference = self.normalizer.normalize(reference).as_document();
            let similarity = self.weighting.similarity(&resume, &reference).unwrap_or(0.0);
            debug!("Role {} similarity {:.4}", role.as_str(), similarity);

            // strictly greater keeps the earlier role on ties
            if similarity > best.confidence {
                best = RoleMatch {
                    role,
                    confidence: similarity,
                };
            }
        }

        best.confidence = best.confidence.clamp(0.0, 1.0);
        Ok(best)
    }
}

impl Default for RoleIdentifier {
    fn default() -> Self {
        Self::new(TextNormalizer::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifies_data_scientist() {
        let identifier = RoleIdentifier::default();
        let text = "Data scientist building machine learning models with TensorFlow, PyTorch, \
            pandas and NumPy. Regression, classification and clustering on big data with Spark.";

        let role = identifier.identify_role(text).unwrap();

        assert_eq!(role.role, JobRole::DataScientist);
        assert!(role.confidence > 0.0 && role.confidence <= 1.0);
    }

    #[test]
    fn test_identifies_finance() {
        let identifier = RoleIdentifier::default();
        let text = "Financial analyst: budgeting, forecasting, audit, tax compliance, cash flow and valuation in Excel.";

        assert_eq!(identifier.identify_role(text).unwrap().role, JobRole::Finance);
    }

    #[test]
    fn test_tie_goes_to_first_role() {
        let identifier = RoleIdentifier::default();
        let role = identifier.identify_role("gardening watercolor").unwrap();

        assert_eq!(role.role, JobRole::SoftwareEngineer);
        assert_eq!(role.confidence, 0.0);
    }

    #[test]
    fn test_empty_resume_fails() {
        let identifier = RoleIdentifier::default();
        let result = identifier.identify_role("  42 ");
        assert!(result.unwrap_err().is_empty_document());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(JobRole::SoftwareEngineer.display_name(), "Software Engineer");
        assert_eq!(JobRole::Finance.to_string(), "Finance");
        assert_eq!(JobRole::Unknown.display_name(), "Unknown");
    }
}
