//! String coercion of candidate values.
//!
//! Validators match text, but callers hold strings, integers, floats or
//! JSON scalars. [`Coerce`] turns each of them into the decimal text that is
//! matched, borrowing whenever the value already is text.

use std::borrow::Cow;
use std::fmt::LowerExp;

use serde_json::Value;

/// A value that can be matched as text.
///
/// Floats print the way browsers print numbers: without a trailing `.0`
/// when integral (`180.0_f64` coerces to `"180"`), `"0"` for both zeros,
/// and in exponent form below `1e-6` or from `1e21` up (`"1e-7"`,
/// `"1e+21"`).
pub trait Coerce {
    fn coerce(&self) -> Cow<'_, str>;
}

impl Coerce for str {
    fn coerce(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Coerce for String {
    fn coerce(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Coerce for Cow<'_, str> {
    fn coerce(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: Coerce + ?Sized> Coerce for &T {
    fn coerce(&self) -> Cow<'_, str> {
        (**self).coerce()
    }
}

macro_rules! coerce_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coerce for $ty {
                fn coerce(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

coerce_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl Coerce for f32 {
    fn coerce(&self) -> Cow<'_, str> {
        Cow::Owned(float_text(*self))
    }
}

impl Coerce for f64 {
    fn coerce(&self) -> Cow<'_, str> {
        Cow::Owned(float_text(*self))
    }
}

/// Shortest round-trip digits laid out positionally for decimal exponents
/// in `-6..21`, in `d.ddde±x` form otherwise.
fn float_text<F: LowerExp + Into<f64> + Copy>(value: F) -> String {
    let wide: f64 = value.into();
    if wide.is_nan() {
        return "NaN".to_string();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if wide == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest digits, e.g. `-1.2345e-7`
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let len = digits.len() as i32;
    // position of the decimal point relative to the first digit
    let point = exponent + 1;

    let body = if len <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, exponent.abs())
        }
    };

    format!("{}{}", sign, body)
}

impl Coerce for Value {
    fn coerce(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Cow::Owned(i.to_string())
                } else if let Some(u) = n.as_u64() {
                    Cow::Owned(u.to_string())
                } else {
                    // serde_json prints floats with a trailing `.0`
                    Cow::Owned(float_text(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Value::Null => Cow::Borrowed("null"),
            other => Cow::Owned(other.to_string()),
        }
    }
}
