//! Resume scorer library: TF-IDF similarity scoring of resumes and job descriptions

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod resources;

pub use config::Config;
pub use error::{Result, ResumeScorerError};
pub use processing::analyzer::{AnalysisOutcome, AnalysisResult, CategoryFeedbackRow, ResumeAnalyzer};
pub use processing::category_scorer::{Category, CategoryScore};
pub use processing::job_matcher::{JobMatchResult, JobMatcher};
pub use processing::role_identifier::{JobRole, RoleMatch};
pub use processing::skills::SkillCategory;
