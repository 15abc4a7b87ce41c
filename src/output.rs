//! Rendering [`Lines`] and [`LineGroups`] back into text.

use itertools::Itertools;
use miette::IntoDiagnostic;
use miette::WrapErr;

use crate::lines::LineGroups;
use crate::lines::Lines;

/// How to print split output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per line, with groups separated by blank lines.
    #[default]
    Plain,
    /// A JSON array of lines, or an array of arrays of lines for groups.
    Json,
}

/// Join lines with line feeds.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Join groups with blank lines, and the lines in each group with line feeds.
///
/// This undoes [`crate::grouped_lines`] for groups which are non-empty and hold non-empty lines
/// without line terminators.
pub fn join_groups(groups: &[Lines]) -> String {
    groups.iter().map(|group| join_lines(group)).join("\n\n")
}

/// Render lines in the given format.
pub fn render_lines(lines: &Lines, format: OutputFormat) -> miette::Result<String> {
    match format {
        OutputFormat::Plain => Ok(with_trailing_newline(join_lines(lines))),
        OutputFormat::Json => to_json(lines),
    }
}

/// Render groups of lines in the given format.
pub fn render_groups(groups: &LineGroups, format: OutputFormat) -> miette::Result<String> {
    match format {
        OutputFormat::Plain => Ok(with_trailing_newline(join_groups(groups))),
        OutputFormat::Json => to_json(groups),
    }
}

fn to_json(value: &impl serde::Serialize) -> miette::Result<String> {
    serde_json::to_string(value)
        .into_diagnostic()
        .wrap_err("Failed to serialize output to JSON")
        .map(|json| json + "\n")
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.is_empty() {
        text.push('\n');
    }
    text
}
