//! Field kinds
//!
//! Names each predicate so a kind can be picked from the command line, a
//! config file or a JSON payload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::predicates;
use crate::coerce::Coerce;

/// The kind of field a value is checked as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Built-in account name, email or phone number
    Username,
    /// Mainland China mobile number
    Phone,
    /// Email address
    Email,
    /// Non-negative integer or decimal
    #[value(alias = "number")]
    #[serde(alias = "number")]
    Rational,
    /// Longitude in [-180, 180]
    #[value(aliases = ["lng", "lon"])]
    #[serde(alias = "lng", alias = "lon")]
    Longitude,
    /// Latitude in [-90, 90]
    #[value(alias = "lat")]
    #[serde(alias = "lat")]
    Latitude,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Username,
        FieldKind::Phone,
        FieldKind::Email,
        FieldKind::Rational,
        FieldKind::Longitude,
        FieldKind::Latitude,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Username => "username",
            FieldKind::Phone => "phone",
            FieldKind::Email => "email",
            FieldKind::Rational => "rational",
            FieldKind::Longitude => "longitude",
            FieldKind::Latitude => "latitude",
        }
    }

    /// Human-readable noun used in diagnostics
    pub fn description(self) -> &'static str {
        match self {
            FieldKind::Username => "username",
            FieldKind::Phone => "phone number",
            FieldKind::Email => "email address",
            FieldKind::Rational => "non-negative number",
            FieldKind::Longitude => "longitude",
            FieldKind::Latitude => "latitude",
        }
    }

    /// Run the predicate for this kind against `value`
    pub fn check(self, value: impl Coerce) -> bool {
        match self {
            FieldKind::Username => predicates::valid_username(&value.coerce()),
            FieldKind::Phone => predicates::valid_phone(value),
            FieldKind::Email => predicates::valid_email(&value.coerce()),
            FieldKind::Rational => predicates::is_rational_number(value),
            FieldKind::Longitude => predicates::check_longitude(value),
            FieldKind::Latitude => predicates::check_latitude(value),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown field kind name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldKind(pub String);

impl fmt::Display for UnknownFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown field kind '{}' (expected one of: username, phone, email, rational, longitude, latitude)",
            self.0
        )
    }
}

impl std::error::Error for UnknownFieldKind {}

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "username" => Ok(FieldKind::Username),
            "phone" => Ok(FieldKind::Phone),
            "email" => Ok(FieldKind::Email),
            "rational" | "number" => Ok(FieldKind::Rational),
            "longitude" | "lng" | "lon" => Ok(FieldKind::Longitude),
            "latitude" | "lat" => Ok(FieldKind::Latitude),
            _ => Err(UnknownFieldKind(s.to_string())),
        }
    }
}
