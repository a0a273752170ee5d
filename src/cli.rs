//! Command-line front end.

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::config::{Args, Config, Input};
use crate::validation::{validate_document, validate_value, FieldKind, ValidationResult};

/// Run the command line: resolve configuration, check the inputs and print
/// the report. Exits with failure when any value is rejected.
pub fn run_with_args(args: Args) -> Result<ExitCode> {
    let config = Config::from_args(args)?;
    let kind = config.effective_kind()?;

    let result = check(&config.input, kind)?;
    let rendered = config.format.render(&result)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("Failed to write report")?;

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Check every value of `input` as `kind`
///
/// Argument values are numbered by position and checked verbatim; files and
/// stdin are read as documents.
pub fn check(input: &Input, kind: FieldKind) -> Result<ValidationResult> {
    match input {
        Input::Values(values) => {
            let mut result = ValidationResult::new();
            for (idx, value) in values.iter().enumerate() {
                result.merge(validate_value(idx + 1, value, kind));
            }
            Ok(result)
        }
        Input::File(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(validate_document(&content, kind))
        }
        Input::Stdin => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(validate_document(&content, kind))
        }
    }
}
