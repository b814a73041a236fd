//! Output formatting and writing utilities
//!
//! Reports are plain serializable structs. Machine formats serialize them
//! directly; the human format renders tables and colored status lines.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::logging::redaction;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::trace;

/// Trait for formatting serializable output
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty | OutputFormat::Human => {
                Ok(serde_json::to_string_pretty(value)?)
            }
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Outcome of one parameter in a validate run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Accepted,
    Defaulted,
    Rejected,
    Skipped,
    Ignored,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Accepted => "accepted",
            Status::Defaulted => "default",
            Status::Rejected => "rejected",
            Status::Skipped => "not checked",
            Status::Ignored => "ignored",
        }
    }
}

/// One row of a validation report
#[derive(Debug, Clone, Serialize)]
pub struct ParameterOutcome {
    pub name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of the validate command
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub registry: String,
    pub valid: bool,
    pub parameters: Vec<ParameterOutcome>,
}

impl ValidationReport {
    /// Mask values of sensitive parameters and secrets embedded in text
    pub fn redact(&mut self) {
        for outcome in &mut self.parameters {
            if let Some(value) = &mut outcome.value {
                if redaction::is_sensitive_key(&outcome.name) {
                    *value = serde_json::Value::String("***".to_string());
                } else {
                    redaction::redact_json_value(value);
                }
            }
        }
    }

    pub fn rejected(&self) -> usize {
        self.parameters
            .iter()
            .filter(|p| p.status == Status::Rejected)
            .count()
    }
}

/// One row of a registry summary
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSummary {
    pub name: String,
    pub kind: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result of the check command
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySummary {
    pub registry: String,
    pub parameters: Vec<ParameterSummary>,
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }
        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Writing formatted output");
        self.writeln(formatted.trim_end())
    }

    /// Write a validation report
    pub fn validation_report(&mut self, report: &ValidationReport) -> Result<()> {
        if !self.is_human() {
            return self.data(report);
        }

        self.section(&format!("Parameters ({})", report.registry))?;
        let rows = report
            .parameters
            .iter()
            .map(|p| {
                vec![
                    p.name.clone(),
                    self.paint_status(p.status),
                    p.value.as_ref().map(compact_value).unwrap_or_default(),
                    p.message.clone().unwrap_or_default(),
                ]
            })
            .collect();
        self.table(&["PARAMETER", "STATUS", "VALUE", "DETAIL"], rows)
    }

    /// Write a registry summary
    pub fn registry_summary(&mut self, summary: &RegistrySummary) -> Result<()> {
        if !self.is_human() {
            return self.data(summary);
        }

        self.section(&format!("Registry ({})", summary.registry))?;
        let rows = summary
            .parameters
            .iter()
            .map(|p| {
                vec![
                    p.name.clone(),
                    p.kind.clone(),
                    if p.required { "yes" } else { "no" }.to_string(),
                    p.default.as_ref().map(compact_value).unwrap_or_default(),
                    p.rule.clone(),
                    p.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        self.table(
            &["PARAMETER", "KIND", "REQUIRED", "DEFAULT", "RULE", "DESCRIPTION"],
            rows,
        )
    }

    fn paint_status(&self, status: Status) -> String {
        let label = status.label();
        if !self.use_color {
            return label.to_string();
        }
        match status {
            Status::Accepted => label.green().to_string(),
            Status::Defaulted => label.cyan().to_string(),
            Status::Rejected => label.red().bold().to_string(),
            Status::Skipped => label.yellow().to_string(),
            Status::Ignored => label.dimmed().to_string(),
        }
    }

    /// Write a table (human format only)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        // Widths ignore ANSI escapes so colored cells still line up
        let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(visible_width(cell));
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(&header_row.bold().to_string())?;
        } else {
            self.writeln(&header_row)?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| match widths.get(i) {
                    Some(width) => pad(cell, *width),
                    None => cell.clone(),
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }
}

fn visible_width(cell: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in cell.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => width += 1,
        }
    }
    width
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(cell));
    format!("{}{}", cell, " ".repeat(fill))
}

/// Format a JSON value in a compact, human-readable way
fn compact_value(value: &serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) if arr.len() <= 3 => format!(
            "[{}]",
            arr.iter().map(compact_value).collect::<Vec<_>>().join(", ")
        ),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Writer that keeps everything written for inspection
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn writer(format: OutputFormat) -> (OutputWriter, Captured) {
        let captured = Captured::default();
        let writer = OutputWriter::with_writer(format, false, false, Box::new(captured.clone()));
        (writer, captured)
    }

    fn report() -> ValidationReport {
        ValidationReport {
            request_id: None,
            registry: "preset java-gateway".to_string(),
            valid: false,
            parameters: vec![
                ParameterOutcome {
                    name: "timeout".to_string(),
                    status: Status::Rejected,
                    value: Some(serde_json::json!(31)),
                    rule: Some("range".to_string()),
                    message: Some("31 is outside [1, 30]".to_string()),
                },
                ParameterOutcome {
                    name: "jmx_password".to_string(),
                    status: Status::Accepted,
                    value: Some(serde_json::json!("hunter2")),
                    rule: None,
                    message: None,
                },
            ],
        }
    }

    #[test]
    fn test_human_report_table() {
        let (mut out, captured) = writer(OutputFormat::Human);
        let mut report = report();
        report.redact();
        out.validation_report(&report).unwrap();

        let text = captured.text();
        assert!(text.contains("=== Parameters (preset java-gateway) ==="));
        assert!(text.contains("PARAMETER"));
        assert!(text.contains("rejected"));
        assert!(text.contains("31 is outside [1, 30]"));
        assert!(text.contains("\"***\""));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn test_json_report() {
        let (mut out, captured) = writer(OutputFormat::Json);
        out.validation_report(&report()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(captured.text().trim()).unwrap();
        assert_eq!(parsed["valid"], false);
        assert_eq!(parsed["parameters"][0]["status"], "rejected");
        assert_eq!(parsed["parameters"][0]["rule"], "range");
        assert!(parsed.get("request_id").is_none());
    }

    #[test]
    fn test_messages_suppressed_for_machine_formats() {
        let (mut out, captured) = writer(OutputFormat::Yaml);
        out.info("hello").unwrap();
        out.success("done").unwrap();
        out.error("bad").unwrap();
        assert!(captured.text().is_empty());
    }

    #[test]
    fn test_quiet_keeps_errors() {
        let captured = Captured::default();
        let mut out =
            OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(captured.clone()));
        out.info("hidden").unwrap();
        out.error("shown").unwrap();
        assert_eq!(captured.text(), "ERROR: shown\n");
    }

    #[test]
    fn test_rejected_count() {
        assert_eq!(report().rejected(), 1);
    }

    #[test]
    fn test_visible_width_ignores_escapes() {
        assert_eq!(visible_width("\u{1b}[31mabc\u{1b}[0m"), 3);
        assert_eq!(pad("ab", 4), "ab  ");
    }
}
