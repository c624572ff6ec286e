//! Output formatters for console, JSON and markdown reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeScorerError};
use crate::output::report::{ReportBody, ScoringReport};
use crate::processing::analyzer::AnalysisResult;
use crate::processing::job_matcher::JobMatchResult;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting scoring reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoringReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    formatters: Vec<Box<dyn OutputFormatter>>,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_list(&self, output: &mut String, items: &[String], marker: &str, color: Color) {
        for item in items {
            output.push_str(&format!("  {} {}\n", self.colorize(marker, color), item));
        }
    }

    fn format_analysis(&self, output: &mut String, result: &AnalysisResult) {
        output.push_str(&self.format_header("Category Scores", 2));
        for score in &result.category_scores {
            output.push_str(&format!(
                "  {:<18} {:>3}% {}\n",
                score.category.label(),
                score.score,
                self.format_score_badge(score.score)
            ));
            if self.detailed {
                output.push_str(&format!("      {}\n", score.feedback));
            }
        }

        output.push_str(&self.format_header("Identified Role", 2));
        output.push_str(&format!(
            "  {} ({}% confidence)\n",
            self.colorize(&result.job_role.role.display_name(), Color::Cyan),
            result.role_confidence_percent()
        ));

        output.push_str(&self.format_header("Key Strengths", 2));
        self.format_list(output, &result.key_strengths, "+", Color::Green);

        output.push_str(&self.format_header("Improvement Suggestions", 2));
        self.format_list(output, &result.improvement_suggestions, "-", Color::Yellow);

        if !result.keywords.is_empty() {
            output.push_str(&self.format_header("Keywords", 3));
            output.push_str(&format!("  {}\n", result.keywords.join(", ")));
        }
    }

    fn format_match(&self, output: &mut String, result: &JobMatchResult, suggestions: &[String]) {
        output.push_str(&format!("Document similarity: {}%\n", result.similarity_score));

        output.push_str(&self.format_header("Skill Match", 2));
        for (category, score) in &result.skill_match_scores {
            output.push_str(&format!(
                "  {:<10} {:>3}% {}\n",
                category.as_str(),
                score,
                self.format_score_badge(*score)
            ));

            if self.detailed {
                if let Some(matched) = result.matched_skills.get(category) {
                    if !matched.is_empty() {
                        let matched: Vec<&str> = matched.iter().map(String::as_str).collect();
                        output.push_str(&format!("      matched: {}\n", matched.join(", ")));
                    }
                }
            }
            if let Some(missing) = result.missing_skills.get(category) {
                if !missing.is_empty() {
                    output.push_str(&format!(
                        "      {} {}\n",
                        self.colorize("missing:", Color::Red),
                        missing.join(", ")
                    ));
                }
            }
        }

        output.push_str(&self.format_header("Suggestions", 2));
        self.format_list(output, suggestions, "-", Color::Yellow);
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoringReport) -> Result<String> {
        let mut output = String::new();

        let title = match &report.body {
            ReportBody::Analysis { .. } => "RESUME ANALYSIS",
            ReportBody::Match { .. } => "JOB MATCH ANALYSIS",
        };
        output.push_str(&self.format_header(title, 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            report.summary.score,
            self.format_score_badge(report.summary.score)
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(&report.summary.verdict, Color::Cyan)));

        if let Some(reason) = &report.summary.degraded_reason {
            output.push_str(&format!(
                "{} analysis fell back to default results: {}\n",
                self.colorize("Warning:", Color::Red),
                reason
            ));
        }

        match &report.body {
            ReportBody::Analysis { outcome, .. } => self.format_analysis(&mut output, outcome.result()),
            ReportBody::Match { result, suggestions } => self.format_match(&mut output, result, suggestions),
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoringReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }

    fn push_bullets(output: &mut String, items: &[String]) {
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }

    fn format_analysis(output: &mut String, result: &AnalysisResult) {
        output.push_str("## Category Scores\n\n");
        output.push_str("| Category | Score | Feedback |\n");
        output.push_str("|----------|-------|----------|\n");
        for score in &result.category_scores {
            output.push_str(&format!(
                "| {} | {}% | {} |\n",
                score.category.label(),
                score.score,
                score.feedback.replace('|', "\\|")
            ));
        }
        output.push('\n');

        output.push_str(&format!(
            "**Identified Role:** {} ({}% confidence)\n\n",
            result.job_role.role.display_name(),
            result.role_confidence_percent()
        ));

        output.push_str("## Key Strengths\n\n");
        Self::push_bullets(output, &result.key_strengths);

        output.push_str("## Improvement Suggestions\n\n");
        Self::push_bullets(output, &result.improvement_suggestions);

        if !result.keywords.is_empty() {
            output.push_str(&format!("**Keywords:** {}\n\n", result.keywords.join(", ")));
        }
    }

    fn format_match(output: &mut String, result: &JobMatchResult, suggestions: &[String]) {
        output.push_str(&format!("**Document Similarity:** {}%\n\n", result.similarity_score));

        output.push_str("## Skill Match\n\n");
        output.push_str("| Skill Category | Score | Missing |\n");
        output.push_str("|----------------|-------|---------|\n");
        for (category, score) in &result.skill_match_scores {
            let missing = result
                .missing_skills
                .get(category)
                .map(|skills| skills.join(", "))
                .unwrap_or_default();
            output.push_str(&format!("| {} | {}% | {} |\n", category.as_str(), score, missing));
        }
        output.push('\n');

        output.push_str("## Suggestions\n\n");
        Self::push_bullets(output, suggestions);
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoringReport) -> Result<String> {
        let mut output = String::new();

        let title = match &report.body {
            ReportBody::Analysis { .. } => "Resume Analysis Report",
            ReportBody::Match { .. } => "Job Match Report",
        };
        output.push_str(&format!("# {}\n\n", title));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!("**Resume:** `{}`", file_name(&report.metadata.resume_file)));
            if let Some(job_file) = &report.metadata.job_file {
                output.push_str(&format!(" | **Job:** `{}`", file_name(job_file)));
            }
            output.push_str("\n\n");
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Overall Score:** {}% {}\n\n",
            report.summary.score,
            Self::markdown_score_badge(report.summary.score)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.summary.verdict));

        if let Some(reason) = &report.summary.degraded_reason {
            output.push_str(&format!("> **Warning:** analysis fell back to default results ({})\n\n", reason));
        }

        match &report.body {
            ReportBody::Analysis { outcome, .. } => Self::format_analysis(&mut output, outcome.result()),
            ReportBody::Match { result, suggestions } => Self::format_match(&mut output, result, suggestions),
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            formatters: vec![
                Box::new(ConsoleFormatter::new(use_colors, detailed)),
                Box::new(JsonFormatter::new(pretty_json)),
                Box::new(MarkdownFormatter::new(include_metadata)),
            ],
        }
    }

    pub fn generate_report(&self, report: &ScoringReport, format: &OutputFormat) -> Result<String> {
        let formatter = self
            .formatters
            .iter()
            .find(|formatter| formatter.supports_format() == *format)
            .ok_or_else(|| {
                ResumeScorerError::OutputFormatting(format!("No formatter registered for {:?}", format))
            })?;

        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_score{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_score{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_score{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::{AnalysisOutcome, AnalysisResult};
    use crate::processing::job_matcher::JobMatcher;
    use std::time::Duration;

    fn analysis_report() -> ScoringReport {
        let outcome = AnalysisOutcome::Complete(AnalysisResult::degraded());
        ScoringReport::from_analysis(outcome, "/tmp/jane_resume.txt", Duration::from_millis(5))
    }

    fn match_report() -> ScoringReport {
        let matcher = JobMatcher::default();
        let result = matcher.calculate_match_score("Python and Docker", "Python, Kubernetes and leadership");
        let suggestions = matcher.generate_improvement_suggestions(&result);
        ScoringReport::from_match(result, suggestions, "resume.md", "job.txt", Duration::from_millis(3))
    }

    #[test]
    fn test_console_without_colors() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&analysis_report()).unwrap();

        assert!(output.contains("RESUME ANALYSIS"));
        assert!(output.contains("Overall Score: 50% [BELOW AVG]"));
        assert!(output.contains("Unable to analyze formatting due to an error."));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_console_match_lists_missing_skills() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&match_report()).unwrap();

        assert!(output.contains("JOB MATCH ANALYSIS"));
        assert!(output.contains("missing: kubernetes"));
        assert!(output.contains("Add these technical skills to your resume: kubernetes"));
    }

    #[test]
    fn test_json_is_parseable() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&match_report()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["body"]["kind"], "match");
        assert_eq!(value["body"]["result"]["missing_skills"]["technical"][0], "kubernetes");
    }

    #[test]
    fn test_markdown_metadata() {
        let formatter = MarkdownFormatter::new(true);
        let output = formatter.format_report(&analysis_report()).unwrap();

        assert!(output.starts_with("# Resume Analysis Report"));
        assert!(output.contains("**Resume:** `jane_resume.txt`"));
        assert!(output.contains("| technical skills | 50% |"));
    }

    #[test]
    fn test_generator_dispatches_by_supported_format() {
        assert_eq!(ConsoleFormatter::new(false, false).supports_format(), OutputFormat::Console);
        assert_eq!(JsonFormatter::new(true).supports_format(), OutputFormat::Json);
        assert_eq!(MarkdownFormatter::new(true).supports_format(), OutputFormat::Markdown);

        let generator = ReportGenerator::with_options(false, false, false, true);
        let report = match_report();

        let console = generator.generate_report(&report, &OutputFormat::Console).unwrap();
        assert!(console.contains("JOB MATCH ANALYSIS"));

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert_eq!(json, JsonFormatter::new(false).format_report(&report).unwrap());

        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with('#'));
    }

    #[test]
    fn test_generator_without_formatter_fails() {
        let generator = ReportGenerator { formatters: Vec::new() };
        let result = generator.generate_report(&analysis_report(), &OutputFormat::Json);
        assert!(matches!(result, Err(ResumeScorerError::OutputFormatting(_))));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "cv/jane.md", false), "jane_score.json");
        assert!(suggest_filename(&OutputFormat::Markdown, "jane.txt", true).ends_with(".md"));
    }
}
