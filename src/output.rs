//! Output formatting for diff reports.
//!
//! Renders a [`DiffReport`] for terminals (colored), plain text, or JSON.
//!
//! # Examples
//!
//! ```
//! use jsoncmp::{diff_strings, format_report, DiffOptions, OutputFormat, OutputOptions};
//!
//! let report = diff_strings(
//!     r#"{"age": 30}"#,
//!     r#"{"age": 31}"#,
//!     &DiffOptions::default(),
//! ).unwrap();
//! let output = format_report(&report, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
//! assert!(output.contains("age"));
//! ```

use crate::diff::{ChangeEntry, ChangeType, DiffDetail, DiffReport, FieldDiff, Summary};
use crate::error::OutputError;
use colored::*;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// JSON representation of the report
    Json,
    /// Plain text, no colors (suitable for piping)
    Plain,
}

/// Options for controlling output formatting.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Hide unchanged elements and fields
    pub compact: bool,
    /// Maximum length for displayed values (truncate if longer)
    pub max_value_length: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            compact: true,
            max_value_length: 80,
        }
    }
}

/// Formats a report according to the specified format and options.
///
/// # Errors
///
/// Only the JSON format can fail, when report serialization does.
pub fn format_report(
    report: &DiffReport,
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Terminal => Ok(format_text(report, options, true)),
        OutputFormat::Plain => Ok(format_text(report, options, false)),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| OutputError::JsonSerializationError { source: e }),
    }
}

/// One-line human summary of a report ("Found: 2 added, 1 modified").
pub fn summary_message(summary: &Summary) -> String {
    let mut parts = Vec::new();
    if summary.added > 0 {
        parts.push(format!("{} added", summary.added));
    }
    if summary.removed > 0 {
        parts.push(format!("{} removed", summary.removed));
    }
    if summary.modified > 0 {
        parts.push(format!("{} modified", summary.modified));
    }

    if parts.is_empty() {
        "No differences found".to_string()
    } else {
        format!("Found: {}", parts.join(", "))
    }
}

fn format_text(report: &DiffReport, options: &OutputOptions, color: bool) -> String {
    let mut lines = Vec::new();

    match &report.detail {
        DiffDetail::ArrayOfObjects { changes } => {
            for change in changes {
                if options.compact && change.kind == ChangeType::Unchanged {
                    continue;
                }
                lines.push(format_entry(change, color));
                if let Some(field_diff) = &change.field_diff {
                    format_fields(field_diff, options, color, "    ", &mut lines);
                }
            }
        }
        DiffDetail::Object { field_diff } => {
            format_fields(field_diff, options, color, "", &mut lines);
        }
    }

    if lines.is_empty() {
        let message = "No changes detected.".to_string();
        return if color {
            message.dimmed().to_string()
        } else {
            message
        };
    }

    let mut output = lines.join("\n");
    output.push_str("\n\n");
    output.push_str(&format_summary(&report.summary));
    output
}

fn format_entry(change: &ChangeEntry, color: bool) -> String {
    let text = match change.kind {
        ChangeType::Added => format!("+ item [{}]", index_label(change.right_index)),
        ChangeType::Removed => format!("- item [{}]", index_label(change.left_index)),
        ChangeType::Modified => format!(
            "• item [{} → {}] (similarity {:.2})",
            index_label(change.left_index),
            index_label(change.right_index),
            change.similarity.unwrap_or(0.0)
        ),
        ChangeType::Unchanged => format!(
            "  item [{} → {}]",
            index_label(change.left_index),
            index_label(change.right_index)
        ),
    };

    if !color {
        return text;
    }
    match change.kind {
        ChangeType::Added => text.green().to_string(),
        ChangeType::Removed => text.red().to_string(),
        ChangeType::Modified => text.yellow().to_string(),
        ChangeType::Unchanged => text.dimmed().to_string(),
    }
}

fn format_fields(
    field_diff: &FieldDiff,
    options: &OutputOptions,
    color: bool,
    pad: &str,
    lines: &mut Vec<String>,
) {
    let max = options.max_value_length;

    for (key, value) in &field_diff.added {
        let text = format!("{}+ {}: {}", pad, key, value.preview(max));
        lines.push(if color { text.green().to_string() } else { text });
    }
    for (key, value) in &field_diff.removed {
        let text = format!("{}- {}: {}", pad, key, value.preview(max));
        lines.push(if color { text.red().to_string() } else { text });
    }
    for (key, change) in &field_diff.modified {
        let text = format!(
            "{}• {}: {} → {}",
            pad,
            key,
            change.left.preview(max),
            change.right.preview(max)
        );
        lines.push(if color { text.yellow().to_string() } else { text });
    }
    if !options.compact {
        for (key, value) in &field_diff.unchanged {
            let text = format!("{}  {}: {}", pad, key, value.preview(max));
            lines.push(if color { text.dimmed().to_string() } else { text });
        }
    }
}

fn index_label(index: Option<usize>) -> String {
    index.map_or_else(|| "-".to_string(), |i| i.to_string())
}

fn format_summary(summary: &Summary) -> String {
    if summary.is_empty() {
        return "Summary: No changes".to_string();
    }

    let mut parts = Vec::new();
    if summary.added > 0 {
        parts.push(format!("{} added", summary.added));
    }
    if summary.removed > 0 {
        parts.push(format!("{} removed", summary.removed));
    }
    if summary.modified > 0 {
        parts.push(format!("{} modified", summary.modified));
    }
    if summary.unchanged > 0 {
        parts.push(format!("{} unchanged", summary.unchanged));
    }

    format!("Summary: {}", parts.join(", "))
}
