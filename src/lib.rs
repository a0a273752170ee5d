//! fieldcheck
//!
//! Pure validators for form input: usernames, mainland China mobile
//! numbers, email addresses, non-negative numbers, longitudes and latitudes.
//!
//! This library provides:
//! - Stateless predicates over strings, numbers and JSON scalars
//! - Field kinds naming each predicate
//! - Batch validation with line diagnostics
//! - The `fieldcheck` command line (configuration and report rendering)

pub mod cli;
pub mod coerce;
pub mod config;
pub mod patterns;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use coerce::Coerce;
pub use config::Config;
pub use validation::{
    check_latitude, check_longitude, is_rational_number, valid_email, valid_phone, valid_username,
};
pub use validation::{validate_document, validate_value, Diagnostic, FieldKind, ValidationResult};
