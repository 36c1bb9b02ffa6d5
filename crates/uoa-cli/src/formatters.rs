//! Output formatters for CLI commands.
//!
//! Every command produces a serializable report; the formatters render it
//! as JSON, as plain `key: value` text, or as colorized text.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use uoa_core::cli::OutputFormat;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if the data cannot be serialized.
///
/// # Examples
///
/// ```
/// use uoa_cli::formatters::format_output;
/// use uoa_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     file_count: usize,
/// }
///
/// let output = format_output(&Summary { file_count: 31 }, OutputFormat::Text)?;
/// assert_eq!(output, "file_count: 31");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, Style, render};

    /// Format data as indented `key: value` lines without colors.
    ///
    /// Suitable for piping to other commands or scripts.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be converted to a JSON value.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(render(&serde_json::to_value(data)?, Style::Plain))
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Result, Serialize, Style, render};

    /// Format data as colorized, indented `key: value` lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be converted to a JSON value.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(render(&serde_json::to_value(data)?, Style::Colored))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Colored,
}

fn render(value: &Value, style: Style) -> String {
    let mut out = String::new();
    match value {
        Value::Object(_) | Value::Array(_) => render_nested(value, 0, style, &mut out),
        scalar => {
            out.push_str(&scalar_text(scalar, style));
            out.push('\n');
        }
    }
    // Callers print with println!
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

fn render_nested(value: &Value, indent: usize, style: Style, out: &mut String) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let key = match style {
                    Style::Plain => key.clone(),
                    Style::Colored => key.blue().bold().to_string(),
                };
                if is_scalar(val) {
                    out.push_str(&format!("{pad}{key}: {}\n", scalar_text(val, style)));
                } else if is_empty_container(val) {
                    out.push_str(&format!("{pad}{key}: (none)\n"));
                } else {
                    out.push_str(&format!("{pad}{key}:\n"));
                    render_nested(val, indent + 1, style, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if is_scalar(item) {
                    out.push_str(&format!("{pad}- {}\n", scalar_text(item, style)));
                } else {
                    out.push_str(&format!("{pad}-\n"));
                    render_nested(item, indent + 1, style, out);
                }
            }
        }
        scalar => out.push_str(&format!("{pad}{}\n", scalar_text(scalar, style))),
    }
}

const fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn scalar_text(value: &Value, style: Style) -> String {
    let plain = match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if style == Style::Plain {
        return plain;
    }
    match value {
        Value::Null => plain.dimmed().to_string(),
        Value::Bool(_) => plain.yellow().to_string(),
        Value::Number(_) => plain.cyan().to_string(),
        _ => plain.green().to_string(),
    }
}
