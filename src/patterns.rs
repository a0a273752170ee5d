//! Compiled field patterns.
//!
//! Digit classes are spelled `[0-9]` because `\d` is Unicode-aware in the
//! `regex` crate and would accept non-ASCII decimal digits. The email local
//! part also excludes U+FEFF, which `\s` leaves out.

use regex::Regex;
use std::sync::LazyLock;

/// Chinese mobile number, optionally prefixed with `+86`, `086` or `86`.
pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+?0?86-?)?1[345789][0-9]{9}$").expect("phone pattern compiles")
});

/// Dotted or quoted local part, then a bracketed dotted quad or a hostname
/// ending in an alphabetic label of two or more letters.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s\x{FEFF}@"]+(\.[^<>()\[\]\\.,;:\s\x{FEFF}@"]+)*)|("[^\n\r\x{2028}\x{2029}]+"))"#,
        r"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$",
    ))
    .expect("email pattern compiles")
});

/// Non-negative integer or decimal.
pub static RATIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("rational pattern compiles"));

/// Longitude in [-180, 180] with at most six decimal places.
pub static LONGITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(-|\+)?(",
        r"(([0-9]|[1-9][0-9]|1[0-7][0-9]|0{1,3})\.[0-9]{0,6})",
        r"|([0-9]|[1-9][0-9]|1[0-7][0-9]|0{1,3})",
        r"|180\.0{0,6}",
        r"|180",
        r")$",
    ))
    .expect("longitude pattern compiles")
});

/// Latitude in [-90, 90] with at most six decimal places.
pub static LATITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-|\+)?([0-8]?[0-9]\.[0-9]{0,6}|90\.0{0,6}|[0-8]?[0-9]|90)$")
        .expect("latitude pattern compiles")
});
