//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with dedicated
//! rendering for admission reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use netguard_validation::{AdmissionResponse, Operation};
use serde::Serialize;
use std::io::{self, Write};
use tracing::trace;

/// Trait for formatting output with specialized support for reports
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the outcome of validating a set of manifests
    fn format_report(&self, report: &ValidationReport, use_color: bool) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // Human output falls back to pretty JSON for arbitrary data
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_report(&self, report: &ValidationReport, use_color: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_report_human(report, use_color)),
            _ => self.format(report),
        }
    }
}

/// Decision for one manifest document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    pub index: usize,
    #[serde(flatten)]
    pub response: AdmissionResponse,
}

/// Decisions for every document of one manifest source
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub source: String,
    pub operation: Operation,
    pub total: usize,
    pub rejected: usize,
    pub documents: Vec<DocumentReport>,
}

impl ValidationReport {
    pub fn new(source: impl Into<String>, operation: Operation, documents: Vec<DocumentReport>) -> Self {
        let rejected = documents.iter().filter(|doc| !doc.response.allowed).count();
        Self {
            source: source.into(),
            operation,
            total: documents.len(),
            rejected,
            documents,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.rejected == 0
    }
}

fn format_report_human(report: &ValidationReport, use_color: bool) -> String {
    let mut output = String::new();

    for doc in &report.documents {
        let kind = doc
            .response
            .kind
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        let subject = format!("{} {} (#{})", kind, doc.response.name, doc.index);

        if doc.response.allowed {
            let line = format!("✓ {}: allowed", subject);
            output.push_str(&paint(&line, use_color, |s| s.green().to_string()));
            output.push('\n');
            continue;
        }

        let line = format!("✗ {}: rejected", subject);
        output.push_str(&paint(&line, use_color, |s| s.red().bold().to_string()));
        output.push('\n');
        for error in &doc.response.errors {
            output.push_str(&format!("    {}\n", error));
        }
    }

    let summary = format!(
        "{}: {} {} of {} document(s) rejected",
        report.source, report.operation, report.rejected, report.total
    );
    if report.is_allowed() {
        output.push_str(&paint(&summary, use_color, |s| s.dimmed().to_string()));
    } else {
        output.push_str(&paint(&summary, use_color, |s| s.yellow().to_string()));
    }
    output.push('\n');

    output
}

fn paint(text: &str, use_color: bool, style: impl Fn(&str) -> String) -> String {
    if use_color {
        style(text)
    } else {
        text.to_string()
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self::with_writer(format, use_color, quiet, verbose, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            verbose,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a debug line when verbose output is enabled
    pub fn debug(&mut self, message: &str) -> Result<()> {
        if self.verbose == 0 || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "DEBUG:".dimmed(), message.dimmed()))
        } else {
            self.writeln(&format!("DEBUG: {}", message))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");

        if formatted.ends_with('\n') {
            self.write(&formatted)
        } else {
            self.writeln(&formatted)
        }
    }

    /// Write an admission report
    ///
    /// Machine formats carry the full report as data. In quiet human mode
    /// only rejected documents are shown.
    pub fn report(&mut self, report: &ValidationReport) -> Result<()> {
        if self.format != OutputFormat::Human {
            return self.data(report);
        }

        if self.quiet {
            let rejected: Vec<DocumentReport> = report
                .documents
                .iter()
                .filter(|doc| !doc.response.allowed)
                .cloned()
                .collect();
            if rejected.is_empty() {
                return Ok(());
            }
            let filtered = ValidationReport {
                documents: rejected,
                ..report.clone()
            };
            let formatted = self.format.format_report(&filtered, self.use_color)?;
            return self.write(&formatted);
        }

        let formatted = self.format.format_report(report, self.use_color)?;
        self.write(&formatted)
    }
}

#[cfg(test)]
mod tests;
