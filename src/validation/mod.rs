//! Validation
//!
//! Field predicates, the kinds that name them, and batch checking of many
//! values.

pub mod engine;
pub mod kind;
pub mod predicates;

pub use engine::{validate_document, validate_value, Diagnostic, Severity};
pub use kind::{FieldKind, UnknownFieldKind};
pub use predicates::{
    check_latitude, check_longitude, is_rational_number, valid_email, valid_phone, valid_username,
};

// Re-export common types
pub use engine::ValidationResult;
