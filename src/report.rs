//! Batch rendering of collected validation errors.
//!
//! Resolution returns every problem it found; this module turns that list
//! into one report, grouped by option name, with warnings clearly marked as
//! advisory. Callers print the report and exit non-zero iff
//! [`Severity::Error`](crate::Severity::Error) entries exist.

use owo_colors::OwoColorize;

use crate::color::should_use_color;
use crate::error::{Severity, ValidationError};

/// Render all collected errors as a report, colored when the terminal
/// supports it.
pub fn render_report(errors: &[ValidationError]) -> String {
    render(errors, should_use_color())
}

pub(crate) fn render(errors: &[ValidationError], color: bool) -> String {
    use std::fmt::Write;

    // Group by option name, preserving first-appearance order.
    let mut groups: Vec<(&str, Vec<&ValidationError>)> = Vec::new();
    for error in errors {
        match groups.iter().position(|(name, _)| *name == error.option) {
            Some(index) => groups[index].1.push(error),
            None => groups.push((error.option.as_str(), vec![error])),
        }
    }

    let mut out = String::new();
    for (_, bucket) in &groups {
        for error in bucket {
            let tag = match error.severity() {
                Severity::Error => {
                    if color {
                        format!("{}", "error".red().bold())
                    } else {
                        "error".to_string()
                    }
                }
                Severity::Warning => {
                    if color {
                        format!("{}", "warning".yellow().bold())
                    } else {
                        "warning".to_string()
                    }
                }
            };
            writeln!(out, "{tag}[{}]: {}", error.code(), error.label()).unwrap();
            if let Some(help) = error.help() {
                writeln!(out, "  = help: {help}").unwrap();
            }
        }
    }
    out
}
