use colored::Colorize;
use serde::Serialize;

use crate::model::{AdviceSeverity, CommitSql};

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

/// Split result for serialization
#[derive(Debug, Serialize)]
pub struct SplitReport<'a> {
    pub count:      usize,
    pub statements: &'a [String]
}

/// Advice result for serialization
#[derive(Debug, Serialize)]
pub struct AdviceReport<'a> {
    pub statements: &'a [CommitSql],
    pub errors:     usize,
    pub warnings:   usize
}

impl<'a> AdviceReport<'a> {
    pub fn new(statements: &'a [CommitSql]) -> Self {
        let count = |severity| {
            statements
                .iter()
                .filter(|s| s.severity() == severity)
                .count()
        };
        Self {
            statements,
            errors: count(AdviceSeverity::Error),
            warnings: count(AdviceSeverity::Warning)
        }
    }
}

/// Format split statements based on output options
pub fn format_split(statements: &[String], opts: &OutputOptions) -> String {
    let report = SplitReport {
        count: statements.len(),
        statements
    };
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(&report).unwrap_or_default(),
        OutputFormat::Text => {
            let mut output = String::new();
            for (i, sql) in statements.iter().enumerate() {
                let header = format!("Statement #{}:", i + 1);
                if opts.colored {
                    output.push_str(&header.cyan().bold().to_string());
                } else {
                    output.push_str(&header);
                }
                output.push('\n');
                output.push_str(sql.trim());
                output.push_str("\n\n");
            }
            output.push_str(&format!("{} statement(s)", statements.len()));
            output
        }
    }
}

/// Format advised statements based on output options
pub fn format_advice(statements: &[CommitSql], opts: &OutputOptions) -> String {
    let report = AdviceReport::new(statements);
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(&report).unwrap_or_default(),
        OutputFormat::Text => format_advice_text(&report, opts)
    }
}

fn format_advice_text(report: &AdviceReport<'_>, opts: &OutputOptions) -> String {
    let mut output = if opts.colored {
        "=== SQL Advice ===\n\n".bold().to_string()
    } else {
        String::from("=== SQL Advice ===\n\n")
    };

    for sql in report.statements {
        let severity = sql.severity();
        let label = format!("[{}]", severity);
        let label = if opts.colored {
            match severity {
                AdviceSeverity::Error => label.red().bold().to_string(),
                AdviceSeverity::Warning => label.yellow().bold().to_string(),
                AdviceSeverity::Info => label.blue().to_string()
            }
        } else {
            label
        };
        output.push_str(&format!("{} #{} {}\n", label, sql.number, sql.content.trim()));
        if !sql.inspect_level.is_empty() {
            output.push_str(&format!("  level: {}\n", sql.inspect_level));
        }
        if !sql.inspect_result.is_empty() {
            output.push_str(&format!("  {}\n", sql.inspect_result));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Summary: {} statement(s), {} error(s), {} warning(s)",
        report.statements.len(),
        report.errors,
        report.warnings
    ));
    output
}
