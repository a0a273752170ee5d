//! Field Predicates
//!
//! Pure, total checks over candidate values. Each returns `false` for
//! anything it does not accept; none of them fail or log.

use crate::coerce::Coerce;
use crate::patterns;

/// Built-in account names accepted as usernames.
const BUILTIN_USERS: &[&str] = &["admin"];

/// Byte order mark, stripped along with Unicode whitespace
const BOM: char = '\u{FEFF}';

/// Check a login identifier.
///
/// The value is trimmed first, then accepted if it is a built-in account
/// name, an email address or a phone number.
///
/// ```
/// use fieldcheck::valid_username;
///
/// assert!(valid_username("  admin  "));
/// assert!(valid_username("user@example.com"));
/// assert!(!valid_username("not-an-email"));
/// ```
pub fn valid_username(value: &str) -> bool {
    let value = value.trim_matches(|c: char| c.is_whitespace() || c == BOM);
    BUILTIN_USERS.contains(&value) || valid_email(value) || valid_phone(value)
}

/// Check a mainland China mobile number, with an optional `+86`/`086`
/// country prefix.
pub fn valid_phone(value: impl Coerce) -> bool {
    patterns::PHONE.is_match(&value.coerce())
}

/// Check an email address.
pub fn valid_email(value: &str) -> bool {
    patterns::EMAIL.is_match(value)
}

/// Check a non-negative integer or decimal such as `12` or `12.5`.
pub fn is_rational_number(value: impl Coerce) -> bool {
    patterns::RATIONAL.is_match(&value.coerce())
}

/// Check a longitude in `[-180, 180]` with at most six decimal places.
pub fn check_longitude(value: impl Coerce) -> bool {
    patterns::LONGITUDE.is_match(&value.coerce())
}

/// Check a latitude in `[-90, 90]` with at most six decimal places.
pub fn check_latitude(value: impl Coerce) -> bool {
    patterns::LATITUDE.is_match(&value.coerce())
}
