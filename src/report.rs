//! Rendering of validation results for the terminal or for other programs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::validation::{Severity, ValidationResult};

/// Output format of the command line
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per diagnostic followed by a summary
    #[default]
    Text,
    /// The full result as a JSON document
    Json,
}

impl OutputFormat {
    pub fn render(self, result: &ValidationResult) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(render_text(result)),
            OutputFormat::Json => render_json(result),
        }
    }
}

/// Render diagnostics as `line N: severity: message` lines plus a summary
pub fn render_text(result: &ValidationResult) -> String {
    let mut out = String::new();

    for diagnostic in &result.diagnostics {
        let severity = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        out.push_str(&format!(
            "line {}: {}: {}\n",
            diagnostic.line, severity, diagnostic.message
        ));
    }

    out.push_str(&format!(
        "{} checked, {} invalid\n",
        result.checked,
        result.error_count()
    ));
    out
}

pub fn render_json(result: &ValidationResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize validation result")
}
