//! Validation Engine
//!
//! Batch checking of values, one per line, separated from the predicates
//! and from CLI concerns.

use serde::Serialize;

use super::kind::FieldKind;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message for a rejected value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub value: String,
    pub kind: FieldKind,
    pub message: String,
    pub severity: Severity,
}

/// Result of validating a document or a single value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub checked: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            checked: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, line: usize, value: &str, kind: FieldKind, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            value: value.to_string(),
            kind,
            message,
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, line: usize, value: &str, kind: FieldKind, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            value: value.to_string(),
            kind,
            message,
            severity: Severity::Warning,
        });
    }

    /// Fold another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.checked += other.checked;
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Validate a single value
pub fn validate_value(line_num: usize, value: &str, kind: FieldKind) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.checked = 1;

    if kind.check(value) {
        return result;
    }

    log::trace!("line {}: rejected {} {:?}", line_num, kind, value);
    result.add_error(
        line_num,
        value,
        kind,
        format!("'{}' is not a valid {}", value, kind.description()),
    );

    // Usernames are trimmed by their predicate, so only other kinds can hint
    let trimmed = value.trim();
    if kind != FieldKind::Username && trimmed != value && kind.check(trimmed) {
        result.add_warning(
            line_num,
            value,
            kind,
            "value would be accepted without surrounding whitespace".to_string(),
        );
    }

    result
}

/// Validate a document holding one value per line
///
/// Blank lines and lines starting with `#` are skipped. Line numbers are
/// 1-based.
pub fn validate_document(content: &str, kind: FieldKind) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (line_num, line) in content.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        result.merge(validate_value(line_num + 1, line, kind));
    }

    log::debug!(
        "validated {} {} value(s): {} error(s), {} warning(s)",
        result.checked,
        kind,
        result.error_count(),
        result.warning_count()
    );

    result
}

fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
