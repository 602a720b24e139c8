//! Numeric coercion for loosely typed context inputs.
//!
//! Callers hand over durations and targets as whatever they parsed them from:
//! integers, floats, or text like `"20.0"`. These helpers turn such values into
//! the types the abilities need and fail loudly instead of defaulting.

use presso_value::Value;

use crate::error::{Error, Result};

/// Coerces `value` to its integral part.
///
/// Fractions are discarded (truncated toward zero), never rounded: `"20.9"` is 20.
pub fn integral(field: &str, value: &Value) -> Result<i64> {
    match value {
        Value::I64(_) | Value::U64(_) => {
            value.as_i64().ok_or_else(|| Error::format(field, value))
        }
        Value::F64(v) => float_integral(*v).ok_or_else(|| Error::format(field, v)),
        Value::String(s) => {
            parse_integral_text(s.trim()).ok_or_else(|| Error::format(field, s))
        }
        other => Err(Error::format(field, other.type_name())),
    }
}

/// Renders a numeric `value` as text, rejecting anything that is not a finite number.
///
/// Text must already be a plain decimal (`500`, `-2`, `12.5`); exponent forms
/// and `inf`/`NaN` spellings are rejected rather than rewritten.
pub fn numeric_text(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Err(Error::missing(field)),
        Value::I64(v) => Ok(v.to_string()),
        Value::U64(v) => Ok(v.to_string()),
        Value::F64(v) if v.is_finite() => Ok(v.to_string()),
        Value::F64(v) => Err(Error::format(field, v)),
        Value::String(s) => {
            let trimmed = s.trim();
            if is_plain_decimal(trimmed) {
                Ok(trimmed.to_string())
            } else {
                Err(Error::format(field, s))
            }
        }
        other => Err(Error::format(field, other.type_name())),
    }
}

/// `[+-]digits[.digits]`, nothing else.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (int_part, frac) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac.is_none_or(all_digits)
}

fn float_integral(v: f64) -> Option<i64> {
    if !v.is_finite() {
        return None;
    }
    let t = v.trunc();
    // i64::MAX is not representable; anything at or above 2^63 overflows.
    if t < i64::MIN as f64 || t >= i64::MAX as f64 {
        return None;
    }
    Some(t as i64)
}

fn parse_integral_text(s: &str) -> Option<i64> {
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }

    // Plain decimal only: `<int>.<digits>`. Exponents and bare dots are rejected.
    let (int_part, frac) = s.split_once('.')?;
    if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = int_part.strip_prefix(['-', '+']).unwrap_or(int_part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    int_part.parse().ok()
}
