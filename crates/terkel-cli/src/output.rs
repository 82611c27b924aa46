//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use terkel_domain::{Coverage, CoverageReport};

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a coverage report in the configured output format.
    pub fn format_report(&self, report: &CoverageReport, dropped: usize) -> Result<String> {
        match self.format {
            CliFormat::Json => self.report_json(report, dropped),
            CliFormat::Table => Ok(self.report_table(report)),
            CliFormat::Summary => Ok(self.report_summary(report)),
        }
    }

    /// Format the report as a table, preceded by the summary line.
    pub fn report_table(&self, report: &CoverageReport) -> String {
        if report.is_empty() {
            return self.colorize("No records parsed from the model reply.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Question", "Matched Content", "Coverage", "Suggested Follow-up"]);

        for record in report.iter() {
            builder.push_record([
                record.question.clone(),
                record.summary.clone(),
                self.coverage_cell(&record.coverage),
                record.follow_up.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.report_summary(report), table)
    }

    /// Format the report as a JSON document.
    pub fn report_json(&self, report: &CoverageReport, dropped: usize) -> Result<String> {
        let summary = report.summarize();
        let records: Vec<serde_json::Value> = report
            .iter()
            .map(|r| {
                json!({
                    "question": r.question,
                    "summary": r.summary,
                    "coverage": r.coverage.label(),
                    "follow_up": r.follow_up,
                })
            })
            .collect();

        let document = json!({
            "summary": {
                "total": summary.total,
                "full": summary.full,
                "not_covered": summary.not_covered,
            },
            "records": records,
            "dropped": dropped,
        });

        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Format the summary counts line.
    pub fn report_summary(&self, report: &CoverageReport) -> String {
        let summary = report.summarize();
        format!(
            "{} question(s) analyzed: {} fully covered, {} not covered",
            summary.total, summary.full, summary.not_covered
        )
    }

    /// Render a coverage label, colored when enabled.
    fn coverage_cell(&self, coverage: &Coverage) -> String {
        let label = coverage.label();
        if !self.color_enabled {
            return label.to_string();
        }

        match coverage {
            Coverage::Full => label.green().to_string(),
            Coverage::Partial => label.yellow().to_string(),
            Coverage::NotCovered => label.red().to_string(),
            Coverage::Unrecognized(_) => label.to_string(),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
