//! Report envelopes wrapping analysis and job-match results

use crate::processing::analyzer::AnalysisOutcome;
use crate::processing::job_matcher::JobMatchResult;
use crate::resources::REFERENCE_CORPUS_VERSION;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub body: ReportBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub scorer_version: String,
    pub reference_corpus_version: u32,
    pub resume_file: String,
    pub job_file: Option<String>,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub score: u8,
    pub verdict: String,
    /// Set when the analysis fell back to the default result
    pub degraded_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    Analysis {
        outcome: AnalysisOutcome,
        /// Feedback document in the stored shape
        feedback: serde_json::Value,
    },
    Match {
        result: JobMatchResult,
        suggestions: Vec<String>,
    },
}

impl ScoringReport {
    pub fn from_analysis(outcome: AnalysisOutcome, resume_file: &str, elapsed: Duration) -> Self {
        let score = outcome.result().overall_score;
        let degraded_reason = match &outcome {
            AnalysisOutcome::Degraded { reason, .. } => Some(reason.clone()),
            AnalysisOutcome::Complete(_) => None,
        };
        let feedback = outcome.result().feedback_blob();

        Self {
            metadata: ReportMetadata::new(resume_file, None, elapsed),
            summary: ReportSummary {
                score,
                verdict: resume_verdict(score).to_string(),
                degraded_reason,
            },
            body: ReportBody::Analysis { outcome, feedback },
        }
    }

    pub fn from_match(
        result: JobMatchResult,
        suggestions: Vec<String>,
        resume_file: &str,
        job_file: &str,
        elapsed: Duration,
    ) -> Self {
        let score = result.overall_match_score;
        Self {
            metadata: ReportMetadata::new(resume_file, Some(job_file), elapsed),
            summary: ReportSummary {
                score,
                verdict: match_verdict(score).to_string(),
                degraded_reason: None,
            },
            body: ReportBody::Match { result, suggestions },
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.summary.degraded_reason.is_some()
    }
}

impl ReportMetadata {
    fn new(resume_file: &str, job_file: Option<&str>, elapsed: Duration) -> Self {
        Self {
            generated_at: Utc::now(),
            scorer_version: env!("CARGO_PKG_VERSION").to_string(),
            reference_corpus_version: REFERENCE_CORPUS_VERSION,
            resume_file: resume_file.to_string(),
            job_file: job_file.map(str::to_string),
            processing_time_ms: elapsed.as_millis() as u64,
        }
    }
}

pub fn resume_verdict(score: u8) -> &'static str {
    match score {
        90..=100 => "Excellent resume - ready to send",
        80..=89 => "Very good resume - minor polishing could help",
        70..=79 => "Good resume - some targeted improvements recommended",
        60..=69 => "Fair resume - several improvements needed",
        50..=59 => "Below average resume - significant improvements required",
        _ => "Weak resume - major revisions needed",
    }
}

pub fn match_verdict(score: u8) -> &'static str {
    match score {
        90..=100 => "Excellent match - strong candidate for this role",
        80..=89 => "Very good match - minor improvements could help",
        70..=79 => "Good match - some targeted improvements recommended",
        60..=69 => "Fair match - several improvements needed",
        50..=59 => "Below average match - significant improvements required",
        _ => "Poor match - major revisions needed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::AnalysisResult;

    #[test]
    fn test_degraded_analysis_report() {
        let outcome = AnalysisOutcome::Degraded {
            reason: "no terms".to_string(),
            result: AnalysisResult::degraded(),
        };
        let report = ScoringReport::from_analysis(outcome, "resume.txt", Duration::from_millis(12));

        assert!(report.is_degraded());
        assert_eq!(report.summary.score, 50);
        assert_eq!(report.metadata.processing_time_ms, 12);
        assert_eq!(report.metadata.job_file, None);
        match &report.body {
            ReportBody::Analysis { feedback, .. } => {
                assert_eq!(feedback["job_role"], "Unknown");
            }
            ReportBody::Match { .. } => panic!("expected analysis body"),
        }
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(match_verdict(95), "Excellent match - strong candidate for this role");
        assert_eq!(match_verdict(10), "Poor match - major revisions needed");
        assert_eq!(resume_verdict(72), "Good resume - some targeted improvements recommended");
    }
}
